//! Players and the move sources that drive them.
//!
//! There is a single [`Player`] type; what differs between a human at the
//! keyboard and the computer is the [`MoveSource`] it is built with:
//! - `RandomSource`: uniformly random targets
//! - `CliSource`: targets typed on a console (std only)
//! - [`ScriptedSource`] / [`from_fn`]: fixed lists and closures

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;

use crate::core::{Board, Coordinate, ShotError, ShotOutcome};

pub mod ai;
pub use ai::RandomSource;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliSource;

/// Supplies target coordinates for one player.
pub trait MoveSource {
    /// Next coordinate to fire at on a `board_size`×`board_size` board, or
    /// `None` if the source can no longer produce targets.
    fn next_target(&mut self, board_size: usize) -> Option<Coordinate>;

    /// The board refused `coord`; another target will be requested.
    fn handle_rejected_shot(&mut self, _coord: Coordinate, _error: &ShotError) {}

    /// The board accepted `coord` with `outcome`.
    fn handle_shot_result(&mut self, _coord: Coordinate, _outcome: ShotOutcome) {}
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_target(&mut self, board_size: usize) -> Option<Coordinate> {
        (**self).next_target(board_size)
    }

    fn handle_rejected_shot(&mut self, coord: Coordinate, error: &ShotError) {
        (**self).handle_rejected_shot(coord, error)
    }

    fn handle_shot_result(&mut self, coord: Coordinate, outcome: ShotOutcome) {
        (**self).handle_shot_result(coord, outcome)
    }
}

/// An accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

impl Shot {
    /// Whether the shooter keeps the turn.
    pub fn continues(&self) -> bool {
        self.outcome.grants_another_shot()
    }
}

/// One participant: a display name and the source of its moves.
pub struct Player {
    name: String,
    source: Box<dyn MoveSource>,
    shots_fired: usize,
    rejected: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, source: impl MoveSource + 'static) -> Self {
        Self {
            name: name.into(),
            source: Box::new(source),
            shots_fired: 0,
            rejected: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shots the opponent's board accepted.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Targets the opponent's board refused.
    pub fn rejected_shots(&self) -> usize {
        self.rejected
    }

    /// Fire at `target` until the board accepts a shot.
    ///
    /// Off-board and repeated targets are reported back to the source and
    /// do not use up the move. Returns `None` if the source runs dry first.
    pub fn make_move(&mut self, target: &mut Board) -> Option<Shot> {
        loop {
            let coord = self.source.next_target(target.size())?;
            match target.shoot(coord) {
                Ok(outcome) => {
                    self.shots_fired += 1;
                    self.source.handle_shot_result(coord, outcome);
                    return Some(Shot {
                        target: coord,
                        outcome,
                    });
                }
                Err(err) => {
                    self.rejected += 1;
                    log::debug!("{}: {}", self.name, err);
                    self.source.handle_rejected_shot(coord, &err);
                }
            }
        }
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("shots_fired", &self.shots_fired)
            .field("rejected", &self.rejected)
            .finish_non_exhaustive()
    }
}

/// Replays a fixed list of targets, then runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    targets: VecDeque<Coordinate>,
}

impl ScriptedSource {
    pub fn new<I>(targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Targets not yet handed out.
    pub fn remaining(&self) -> usize {
        self.targets.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_target(&mut self, _board_size: usize) -> Option<Coordinate> {
        self.targets.pop_front()
    }
}

/// Move source backed by a closure receiving the board size.
pub struct FromFn<F>(F);

/// Wrap `f` as a [`MoveSource`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(usize) -> Option<Coordinate>,
{
    FromFn(f)
}

impl<F> MoveSource for FromFn<F>
where
    F: FnMut(usize) -> Option<Coordinate>,
{
    fn next_target(&mut self, board_size: usize) -> Option<Coordinate> {
        (self.0)(board_size)
    }
}
