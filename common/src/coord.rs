use std::fmt;

use smallvec::SmallVec;

use crate::{Jump, MAX_ROWS};

/// A hole on the triangular board. Rows count from the apex starting at 1,
/// and row `r` holds the holes `1..=r`.
///
/// Invariant: can only represent holes of a board with at most [`MAX_ROWS`]
/// rows. Whether the hole lies on a smaller board is checked with
/// [`Coord::on_board`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    hole: u8,
}

impl Coord {
    pub fn new(row: u8, hole: u8) -> Option<Self> {
        let coord = Coord { row, hole };
        if coord.is_valid() {
            Some(coord)
        } else {
            None
        }
    }

    /// Caller guarantees `1 <= hole <= row <= MAX_ROWS`.
    pub(crate) const fn new_unchecked(row: u8, hole: u8) -> Self {
        Coord { row, hole }
    }

    fn is_valid(self) -> bool {
        (1..=self.row).contains(&self.hole) && self.row <= MAX_ROWS
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn hole(self) -> u8 {
        self.hole
    }

    pub fn on_board(self, row_count: u8) -> bool {
        self.row <= row_count
    }

    /// Position of the hole when the board is read row by row from the apex.
    pub fn index(self) -> u32 {
        let row = self.row as u32;
        row * (row - 1) / 2 + (self.hole as u32 - 1)
    }

    pub fn bitmask(self) -> u64 {
        1u64 << self.index()
    }

    /// All holes of a board with `row_count` rows, in index order.
    pub fn all(row_count: u8) -> impl Iterator<Item = Self> {
        (1..=row_count).flat_map(|row| (1..=row).map(move |hole| Coord { row, hole }))
    }

    /// Every jump starting at this hole that stays on a board with
    /// `row_count` rows. Occupancy is not considered here.
    pub fn possible_jumps(self, row_count: u8) -> SmallVec<[Jump; 6]> {
        let Coord { row, hole } = self;
        let at = Coord::new_unchecked;
        let mut jumps = SmallVec::new();

        if row >= 3 {
            // up and left
            if hole >= 3 {
                jumps.push(Jump::new(self, at(row - 1, hole - 1), at(row - 2, hole - 2)));
            }
            // up and right
            if row - hole >= 2 {
                jumps.push(Jump::new(self, at(row - 1, hole), at(row - 2, hole)));
            }
        }

        if hole >= 3 {
            jumps.push(Jump::new(self, at(row, hole - 1), at(row, hole - 2)));
        }
        if row - hole >= 2 {
            jumps.push(Jump::new(self, at(row, hole + 1), at(row, hole + 2)));
        }

        if row_count >= row + 2 {
            // down and left, then down and right
            jumps.push(Jump::new(self, at(row + 1, hole), at(row + 2, hole)));
            jumps.push(Jump::new(self, at(row + 1, hole + 1), at(row + 2, hole + 2)));
        }

        jumps
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.hole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // test if the coordinate bits appear in the expected sequential order
    fn test_coords() {
        let mut next_mask = 1;
        for coord in Coord::all(MAX_ROWS) {
            assert_eq!(next_mask, coord.bitmask());
            next_mask *= 2;
        }

        assert_eq!(next_mask, 1u64 << 55);
    }

    #[test]
    fn test_new_rejects_holes_off_the_triangle() {
        assert_eq!(Coord::new(0, 0), None);
        assert_eq!(Coord::new(3, 0), None);
        assert_eq!(Coord::new(3, 4), None);
        assert_eq!(Coord::new(MAX_ROWS + 1, 1), None);
        assert!(Coord::new(MAX_ROWS, MAX_ROWS).is_some());
    }

    #[test]
    fn test_corner_has_fewer_jumps_than_interior() {
        let corner = Coord::new(1, 1).unwrap();
        let interior = Coord::new(5, 3).unwrap();

        assert_eq!(corner.possible_jumps(5).len(), 2);
        assert_eq!(interior.possible_jumps(5).len(), 4);
        assert_eq!(interior.possible_jumps(9).len(), 6);
    }

    #[test]
    fn test_no_downward_jumps_near_bottom() {
        let coord = Coord::new(4, 2).unwrap();
        let jumps = coord.possible_jumps(5);
        assert!(jumps.iter().all(|j| j.dst.row() <= 4));
    }

    #[test]
    fn test_jumps_stay_on_board_and_pass_over_midpoint() {
        for row_count in 1..=MAX_ROWS {
            for src in Coord::all(row_count) {
                for jump in src.possible_jumps(row_count) {
                    assert_eq!(jump.src, src);
                    assert!(jump.mid.on_board(row_count));
                    assert!(jump.dst.on_board(row_count));
                    assert_ne!(jump.mid, src);
                    assert_ne!(jump.dst, src);
                    assert_eq!(2 * jump.mid.row(), src.row() + jump.dst.row());
                    assert_eq!(2 * jump.mid.hole(), src.hole() + jump.dst.hole());
                    assert!(Coord::new(jump.dst.row(), jump.dst.hole()).is_some());
                }
            }
        }
    }

    #[test]
    fn test_jump_count_on_standard_board() {
        let total: usize = Coord::all(5).map(|c| c.possible_jumps(5).len()).sum();
        assert_eq!(total, 36);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(3, 2).unwrap().to_string(), "(3,2)");
    }
}
