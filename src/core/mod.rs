//! Core rules engine (no_std + alloc compatible).
//!
//! Board representation, vessel geometry, placement with spacing constraints
//! and shot resolution. Nothing in here performs I/O.

pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod placement;
pub mod ship;

pub use board::Board;
pub use common::{CellState, PlacementError, RulesError, ShotError, ShotOutcome};
pub use config::*;
pub use coord::Coordinate;
pub use placement::{random_board, try_random_board};
pub use ship::{Orientation, Vessel};
