pub mod coord;
pub mod game_state;
pub mod search;

use std::fmt;

pub use crate::{coord::Coord, game_state::GameState};

/// Largest supported board. Its 55 holes still fit into one `u64`.
pub const MAX_ROWS: u8 = 10;

pub const DEFAULT_ROWS: u8 = 5;
pub const DEFAULT_EMPTY_HOLE: Coord = Coord::new_unchecked(3, 2);

/// A peg at `src` jumps over the peg at `mid` and lands in the hole `dst`.
/// The peg at `mid` is removed.
///
/// Jumps are only built by move generation, so the three holes are always
/// in a straight line on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Jump {
    remove_bits: u64,
    add_bits: u64,
    pub src: Coord,
    pub mid: Coord,
    pub dst: Coord,
}

impl Jump {
    pub(crate) fn new(src: Coord, mid: Coord, dst: Coord) -> Jump {
        Jump {
            remove_bits: src.bitmask() | mid.bitmask(),
            add_bits: dst.bitmask(),
            src,
            mid,
            dst,
        }
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {} to {}", self.src, self.mid, self.dst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have between 1 and 10 rows, got {rows}")]
    RowCount { rows: usize },

    #[error("hole ({row},{hole}) is not on a board with {rows} rows")]
    InvalidHole { row: u8, hole: u8, rows: u8 },

    #[error("line {line} of the board picture: {reason}")]
    MalformedAscii { line: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_empty_hole_is_on_default_board() {
        assert_eq!(Coord::new(3, 2), Some(DEFAULT_EMPTY_HOLE));
        assert!(DEFAULT_EMPTY_HOLE.on_board(DEFAULT_ROWS));
    }

    #[test]
    fn test_jump_display() {
        let src = Coord::new(5, 2).unwrap();
        let jump = src.possible_jumps(5)[0];
        assert_eq!(jump.to_string(), "(5,2) over (4,2) to (3,2)");
    }

    #[test]
    fn test_error_display() {
        let err = BoardError::InvalidHole {
            row: 6,
            hole: 1,
            rows: 5,
        };
        assert_eq!(err.to_string(), "hole (6,1) is not on a board with 5 rows");

        let err = BoardError::RowCount { rows: 11 };
        assert_eq!(err.to_string(), "board must have between 1 and 10 rows, got 11");
    }
}
