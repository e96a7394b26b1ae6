#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
mod game;
pub mod player;
pub mod prelude;
pub mod ui;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;

pub use crate::core::*;
pub use game::*;
pub use player::{from_fn, MoveSource, Player, RandomSource, ScriptedSource, Shot};
#[cfg(feature = "std")]
pub use player::CliSource;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use session::{run_session, simulate, FirstMove, SessionOptions, SessionResult, SimReport};
