//! Board state: vessel placement, the blocked set and shot resolution.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::common::{CellState, PlacementError, ShotError, ShotOutcome};
use super::config::Rules;
use super::coord::Coordinate;
use super::ship::Vessel;

/// One side's N×N grid and the vessels on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    fleet_size: usize,
    cells: Vec<CellState>,
    /// Cells that may not be targeted or built on: vessels, their margins and
    /// everything already fired upon.
    blocked: Vec<bool>,
    vessels: Vec<Vessel>,
    destroyed: usize,
    concealed: bool,
    in_play: bool,
}

impl Board {
    /// Empty `size`×`size` board that is lost once `fleet_size` vessels sink.
    ///
    /// Allocates `size * size` cells; sizes should come from rules that pass
    /// [`Rules::validate`].
    pub fn new(size: usize, fleet_size: usize) -> Self {
        Board {
            size,
            fleet_size,
            cells: vec![CellState::Water; size * size],
            blocked: vec![false; size * size],
            vessels: Vec::with_capacity(fleet_size),
            destroyed: 0,
            concealed: false,
            in_play: false,
        }
    }

    /// Empty board sized for `rules`.
    pub fn for_rules(rules: &Rules) -> Self {
        Self::new(rules.board_size, rules.fleet_size())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Vessels still afloat.
    pub fn remaining_vessels(&self) -> usize {
        self.vessels.len() - self.destroyed
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide unharmed vessel cells when rendered. Has no effect on the rules.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn in_play(&self) -> bool {
        self.in_play
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.within(self.size)
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.size + coord.col as usize)
    }

    /// Visible state of `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Whether `coord` is in the blocked set. Off-board cells are never
    /// blocked.
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some_and(|i| self.blocked[i])
    }

    fn block(&mut self, coord: Coordinate) {
        if let Some(i) = self.index(coord) {
            self.blocked[i] = true;
        }
    }

    /// Bounds-clipped one-cell border around `vessel`, including its own
    /// cells. May contain a cell more than once.
    fn margin(&self, vessel: &Vessel) -> Vec<Coordinate> {
        vessel
            .cells()
            .flat_map(Coordinate::neighbours)
            .filter(|c| c.within(self.size))
            .collect()
    }

    /// Place `vessel`, reserving its cells and margin.
    ///
    /// Fails if any cell is off the board or blocked, or once play has begun.
    /// The margin stays visually water until the vessel sinks.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if self.in_play {
            return Err(PlacementError::InvalidPlacement);
        }
        if vessel
            .cells()
            .any(|c| !self.contains(c) || self.is_blocked(c))
        {
            return Err(PlacementError::InvalidPlacement);
        }
        for c in vessel.cells() {
            if let Some(i) = self.index(c) {
                self.cells[i] = CellState::Occupied;
            }
        }
        for c in self.margin(&vessel) {
            self.block(c);
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Forget the placement reservations so shots start from a clean
    /// targeting history. Vessel geometry is kept; no further placement is
    /// accepted.
    pub fn begin_play(&mut self) {
        self.blocked.fill(false);
        self.in_play = true;
    }

    /// Fire at `coord`.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let Some(idx) = self.index(coord) else {
            return Err(ShotError::OutOfBounds { coord });
        };
        if self.blocked[idx] {
            return Err(ShotError::AlreadyTargeted { coord });
        }
        self.blocked[idx] = true;

        let Some(vi) = self.vessels.iter().position(|v| v.contains(coord)) else {
            self.cells[idx] = CellState::Miss;
            return Ok(ShotOutcome::Miss);
        };

        self.vessels[vi].register_hit(coord);
        self.cells[idx] = CellState::Hit;
        if !self.vessels[vi].is_sunk() {
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let vessel = self.vessels[vi];
        for c in self.margin(&vessel) {
            if let Some(i) = self.index(c) {
                if self.cells[i] == CellState::Water {
                    self.cells[i] = CellState::Miss;
                }
                self.blocked[i] = true;
            }
        }
        log::info!(
            "vessel at {} sunk ({}/{})",
            vessel.origin(),
            self.destroyed,
            self.fleet_size
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Returns `true` once every vessel of the fleet has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.fleet_size
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("vessels", &self.vessels)
            .field("destroyed", &self.destroyed)
            .field("fleet_size", &self.fleet_size)
            .field("concealed", &self.concealed)
            .field("in_play", &self.in_play)
            .finish()
    }
}
