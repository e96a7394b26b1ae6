//! Vessels and their derived geometry.

use core::fmt;

use rand::Rng;

use super::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along the row, increasing the column.
    Horizontal,
    /// Cells extend down the column, increasing the row.
    Vertical,
}

impl Orientation {
    /// Pick either orientation with equal probability.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of cells with as many hit points as it is long.
///
/// Occupied cells are derived from origin, length and orientation rather than
/// stored, so a vessel is only a handful of words.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Create an intact vessel. No bounds checking happens here; the board
    /// validates placement.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells covered by the vessel, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (d_row, d_col) = self.orientation.step();
        let origin = self.origin;
        (0..self.length as i32).map(move |i| origin.offset(d_row * i, d_col * i))
    }

    /// Whether `coord` is one of the vessel's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Record a hit on one of the vessel's cells.
    ///
    /// The caller guarantees `coord` belongs to the vessel; the board never
    /// lets the same cell be hit twice.
    pub fn register_hit(&mut self, coord: Coordinate) {
        debug_assert!(self.contains(coord), "hit {} is not on vessel", coord);
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ origin: {}, length: {}, orientation: {:?}, remaining: {} }}",
            self.origin, self.length, self.orientation, self.remaining_hits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn horizontal_cells_increment_column() {
        let v = Vessel::new(Coordinate::new(0, 0), 3, Orientation::Horizontal);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2)
            ]
        );
    }

    #[test]
    fn vertical_cells_increment_row() {
        let v = Vessel::new(Coordinate::new(1, 4), 2, Orientation::Vertical);
        let cells: Vec<_> = v.cells().collect();
        assert_eq!(cells, vec![Coordinate::new(1, 4), Coordinate::new(2, 4)]);
        assert!(v.contains(Coordinate::new(2, 4)));
        assert!(!v.contains(Coordinate::new(3, 4)));
    }

    #[test]
    fn hits_count_down_to_sunk() {
        let mut v = Vessel::new(Coordinate::new(2, 2), 2, Orientation::Horizontal);
        assert_eq!(v.remaining_hits(), 2);
        v.register_hit(Coordinate::new(2, 2));
        assert!(!v.is_sunk());
        v.register_hit(Coordinate::new(2, 3));
        assert!(v.is_sunk());
    }
}
