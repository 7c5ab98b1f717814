use std::fmt;

use colored::Colorize;

use crate::{BoardError, Coord, DEFAULT_EMPTY_HOLE, DEFAULT_ROWS, Jump, MAX_ROWS};

/// Which holes of a triangular board currently hold a peg.
///
/// The occupied holes are stored as a bitmask indexed by [`Coord::index`],
/// so copying a `GameState` copies the whole board. A state is never changed
/// after construction, jumps produce a new state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct GameState {
    row_count: u8,
    pegs: u64,
}

impl GameState {
    /// A full board with a single empty hole.
    pub fn new(row_count: u8, empty_hole: Coord) -> Result<Self, BoardError> {
        if !(1..=MAX_ROWS).contains(&row_count) {
            return Err(BoardError::RowCount {
                rows: row_count as usize,
            });
        }
        if !empty_hole.on_board(row_count) {
            return Err(BoardError::InvalidHole {
                row: empty_hole.row(),
                hole: empty_hole.hole(),
                rows: row_count,
            });
        }

        let full = Coord::all(row_count).fold(0, |mask, coord| mask | coord.bitmask());
        Ok(GameState {
            row_count,
            pegs: full & !empty_hole.bitmask(),
        })
    }

    pub fn default_start() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_EMPTY_HOLE).expect("default board should be valid")
    }

    /// Parse a board picture with one line per row, apex first. `#` is a
    /// peg, `.` an empty hole, whitespace is ignored.
    pub fn from_ascii(lines: &[&str]) -> Result<Self, BoardError> {
        let row_count = u8::try_from(lines.len())
            .ok()
            .filter(|rows| (1..=MAX_ROWS).contains(rows))
            .ok_or(BoardError::RowCount { rows: lines.len() })?;

        let malformed = |row: u8, reason: String| BoardError::MalformedAscii {
            line: row as usize,
            reason,
        };

        let mut pegs = 0;
        for (row, line) in (1..=row_count).zip(lines) {
            let mut hole = 0;
            for c in line.chars() {
                let occupied = match c {
                    '#' => true,
                    '.' => false,
                    c if c.is_whitespace() => continue,
                    c => return Err(malformed(row, format!("invalid character {c:?}"))),
                };

                hole += 1;
                if hole > row {
                    return Err(malformed(row, format!("more than {row} holes")));
                }
                if occupied {
                    pegs |= Coord::new_unchecked(row, hole).bitmask();
                }
            }

            if hole != row {
                return Err(malformed(row, format!("expected {row} holes, found {hole}")));
            }
        }

        Ok(GameState { row_count, pegs })
    }

    pub fn row_count(&self) -> u8 {
        self.row_count
    }

    /// Total number of holes on the board, occupied or not.
    pub fn nr_holes(&self) -> u32 {
        let rows = self.row_count as u32;
        rows * (rows + 1) / 2
    }

    /// Number of occupied holes in this position
    pub fn pegs_remaining(&self) -> u32 {
        self.pegs.count_ones()
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        coord.on_board(self.row_count) && self.pegs & coord.bitmask() > 0
    }

    /// The occupied holes in index order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> {
        let pegs = self.pegs;
        Coord::all(self.row_count).filter(move |coord| pegs & coord.bitmask() > 0)
    }

    pub fn can_jump(&self, jump: Jump) -> bool {
        (self.pegs & jump.add_bits) == 0 && (self.pegs & jump.remove_bits).count_ones() == 2
    }

    /// All jumps that can be made in this position, grouped by the peg that
    /// moves.
    pub fn legal_jumps(&self) -> Vec<Jump> {
        self.occupied()
            .flat_map(|coord| coord.possible_jumps(self.row_count))
            .filter(|&jump| self.can_jump(jump))
            .collect()
    }

    /// The position after `jump`. The jump must be legal in this position,
    /// which is only checked in debug builds.
    pub fn apply_jump(&self, jump: Jump) -> GameState {
        debug_assert!(self.can_jump(jump), "illegal jump {jump}");
        let mut next = self.pegs;
        next &= !jump.remove_bits;
        next |= jump.add_bits;
        GameState {
            row_count: self.row_count,
            pegs: next,
        }
    }

    /// Draw the board before `jump` is made, highlighting the moving peg,
    /// the peg that is removed and the hole it lands in.
    pub fn draw_with_jump(&self, jump: Jump) -> String {
        self.render(|coord, cell| {
            if coord == jump.src {
                cell.on_blue().to_string()
            } else if coord == jump.mid {
                cell.on_red().to_string()
            } else if coord == jump.dst {
                cell.on_green().to_string()
            } else {
                cell.to_string()
            }
        })
    }

    fn render(&self, mut draw_cell: impl FnMut(Coord, &str) -> String) -> String {
        let mut out = String::new();
        for row in 1..=self.row_count {
            out.push_str(&" ".repeat((self.row_count - row) as usize));
            for hole in 1..=row {
                if hole > 1 {
                    out.push(' ');
                }
                let coord = Coord::new_unchecked(row, hole);
                let cell = if self.is_occupied(coord) { "#" } else { "." };
                out.push_str(&draw_cell(coord, cell));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, cell| cell.to_string()))
    }
}
