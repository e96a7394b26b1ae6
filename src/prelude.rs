//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, Board, Coordinate, Game, GameStatus, MoveSource, Orientation, Player,
    RandomSource, Rules, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{run_session, simulate, CliSource, SessionOptions};
