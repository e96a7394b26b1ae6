//! Common types: shot outcomes and the errors raised by board operations.

use thiserror::Error;

use super::coord::Coordinate;

/// Result of a shot the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact cell of a vessel.
    Sunk,
    /// Struck water.
    Miss,
}

impl ShotOutcome {
    /// Hits and sinks grant the shooter another shot.
    pub fn grants_another_shot(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Visible state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Water,
    Occupied,
    Hit,
    Miss,
}

/// Vessel placement was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A cell is off the board, overlaps another vessel or its margin, or the
    /// board is already in play.
    #[error("Vessel cannot be placed there")]
    InvalidPlacement,
}

/// A shot was refused; the shooter should pick another target.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    #[error("Target {coord} is off the board")]
    OutOfBounds { coord: Coordinate },
    #[error("Target {coord} was already fired upon")]
    AlreadyTargeted { coord: Coordinate },
}

/// Game configuration that can never produce a playable board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Board size must be at least 1")]
    EmptyBoard,
    #[error("Fleet must contain at least one vessel")]
    EmptyFleet,
    #[error("Board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("Vessel length must be at least 1")]
    ZeroLengthVessel,
    #[error("Vessel of length {length} does not fit a {size}x{size} board")]
    VesselTooLong { length: usize, size: usize },
    #[error("Fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    #[error("Placement budget must be at least the fleet size")]
    BudgetTooSmall,
}
