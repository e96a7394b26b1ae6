use alloc::vec::Vec;

use super::common::RulesError;

pub const BOARD_SIZE: usize = 6;
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
pub const FLEET_SIZE: usize = FLEET.len();

/// Placement attempts allowed for one whole fleet before the board is thrown
/// away and placement starts over. Tuned for the 6×6 board and the fleet
/// above; it is a safety valve, not a termination guarantee.
pub const PLACEMENT_BUDGET: usize = 2000;

/// Largest side length [`Rules::validate`] accepts. Keeps the cell grid small
/// and every coordinate well inside `i32`.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Side length of the square board.
    pub board_size: usize,
    /// Vessel lengths, placed in this order.
    pub fleet: Vec<usize>,
    pub placement_budget: usize,
}

impl Rules {
    /// Number of vessels each side has to lose before the game ends.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    /// Total cells occupied by one fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Reject configurations that can never be placed.
    ///
    /// Passing does not prove a fleet fits: the spacing rule can still make
    /// a dense fleet impossible, in which case placement retries forever.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.board_size == 0 {
            return Err(RulesError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(RulesError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(RulesError::EmptyFleet);
        }
        if self.fleet.contains(&0) {
            return Err(RulesError::ZeroLengthVessel);
        }
        if let Some(&length) = self.fleet.iter().find(|&&l| l > self.board_size) {
            return Err(RulesError::VesselTooLong {
                length,
                size: self.board_size,
            });
        }
        let capacity = self.board_size * self.board_size;
        if self.fleet_cells() > capacity {
            return Err(RulesError::FleetTooLarge {
                cells: self.fleet_cells(),
                capacity,
            });
        }
        if self.placement_budget < self.fleet_size() {
            return Err(RulesError::BudgetTooSmall);
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            placement_budget: PLACEMENT_BUDGET,
        }
    }
}
