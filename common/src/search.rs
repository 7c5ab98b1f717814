//! Exhaustive enumeration of every game that can be played from a position.
//!
//! There is no pruning and no caching of positions: a position that can be
//! reached through several jump orders is searched once per order. This keeps
//! the search a plain measure of recursion overhead.

use crate::{GameState, Jump};

/// Counters and solutions collected while walking the game tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of finished games, i.e. leaves of the game tree. A game ends
    /// when a single peg remains or when no jump is possible.
    pub games_played: u64,
    /// The jump sequence of every game that ended with a single peg, in the
    /// order they were found. Equal final boards reached through different
    /// jump orders are all kept.
    pub solutions: Vec<Vec<Jump>>,
}

impl SearchStats {
    pub fn solutions_found(&self) -> usize {
        self.solutions.len()
    }
}

/// Play every possible game starting at `start`.
pub fn search(start: &GameState) -> SearchStats {
    let mut stats = SearchStats::default();
    let mut path = Vec::with_capacity(start.pegs_remaining() as usize);

    search_inner(*start, &mut path, &mut stats);

    debug_assert!(path.is_empty());
    stats
}

fn search_inner(pos: GameState, path: &mut Vec<Jump>, stats: &mut SearchStats) {
    let Some(jumps) = expand(pos, path, stats) else {
        return;
    };

    for jump in jumps {
        let next = pos.apply_jump(jump);
        path.push(jump);
        search_inner(next, path, stats);
        path.pop();
    }
}

/// Same enumeration as [`search`], in the same order, but the recursion is
/// replaced by a stack of frames on the heap. Board size is then no longer
/// limited by the call stack.
pub fn search_with_stack(start: &GameState) -> SearchStats {
    struct Frame {
        pos: GameState,
        jumps: std::vec::IntoIter<Jump>,
    }

    let mut stats = SearchStats::default();
    let mut path = Vec::with_capacity(start.pegs_remaining() as usize);
    let mut frames = Vec::with_capacity(start.pegs_remaining() as usize);

    if let Some(jumps) = expand(*start, &path, &mut stats) {
        frames.push(Frame {
            pos: *start,
            jumps: jumps.into_iter(),
        });
    }

    while let Some(frame) = frames.last_mut() {
        let Some(jump) = frame.jumps.next() else {
            // all children done, backtrack to the parent
            frames.pop();
            path.pop();
            continue;
        };

        let next = frame.pos.apply_jump(jump);
        path.push(jump);
        match expand(next, &path, &mut stats) {
            Some(jumps) => frames.push(Frame {
                pos: next,
                jumps: jumps.into_iter(),
            }),
            None => {
                path.pop();
            }
        }
    }

    debug_assert!(path.is_empty());
    stats
}

/// Record `pos` if the game is over, otherwise return the jumps to continue
/// with. `path` is the jump sequence that led to `pos`.
fn expand(pos: GameState, path: &[Jump], stats: &mut SearchStats) -> Option<Vec<Jump>> {
    if pos.pegs_remaining() == 1 {
        log::trace!(
            "solution {} found after {} jumps",
            stats.solutions.len() + 1,
            path.len()
        );
        stats.solutions.push(path.to_vec());
        stats.games_played += 1;
        return None;
    }

    let jumps = pos.legal_jumps();
    if jumps.is_empty() {
        stats.games_played += 1;
        return None;
    }

    Some(jumps)
}
