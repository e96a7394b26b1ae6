//! Grid coordinates.

use core::fmt;

/// Zero-based `(row, col)` position on a board.
///
/// Components are signed so that targets entered off the top or left edge
/// still reach the board and are rejected there as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate one-based display coordinates (as typed by a player) into
    /// engine coordinates.
    pub const fn from_display(row: i32, col: i32) -> Self {
        Self::new(row - 1, col - 1)
    }

    /// One-based `(row, col)` pair for display.
    pub const fn to_display(self) -> (i32, i32) {
        (self.row + 1, self.col + 1)
    }

    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The 3×3 block centred on this cell, the cell itself included.
    /// Results are not clipped to any board.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }

    /// Chebyshev (king-move) distance between two cells.
    pub fn chebyshev(self, other: Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// Returns `true` when the cell lies inside an `size`×`size` grid.
    pub fn within(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
