//! Turn sequencing: two players, two boards, "a hit earns another shot".

use core::fmt;

use rand::Rng;
use thiserror::Error;

use crate::core::Board;
use crate::player::{Player, Shot};

/// Seat at the table. `First` owns board 0, `Second` owns board 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Side {
        if rng.random() {
            Side::First
        } else {
            Side::Second
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first player"),
            Side::Second => f.write_str("second player"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("The {side} stopped supplying moves before the game ended")]
    SourceClosed { side: Side },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Who fired.
    pub side: Side,
    pub shot: Shot,
    /// Set when this shot ended the game.
    pub winner: Option<Side>,
}

/// Turn controller.
///
/// The active side fires one accepted shot at the other side's board. A hit
/// or a sink keeps the turn, a miss hands it over. The game ends as soon as
/// either board has lost its whole fleet.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    boards: [Board; 2],
    active: Side,
    status: GameStatus,
    moves: usize,
}

impl Game {
    /// `players[i]` owns `boards[i]` and fires at the other board.
    /// `first` moves first.
    pub fn new(players: [Player; 2], boards: [Board; 2], first: Side) -> Self {
        let mut game = Self {
            players,
            boards,
            active: first,
            status: GameStatus::InProgress,
            moves: 0,
        };
        game.status = game.evaluate();
        game
    }

    pub fn active(&self) -> Side {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner, once there is one.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    /// Accepted shots by both sides so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    fn evaluate(&self) -> GameStatus {
        if let Some(loser) = [Side::First, Side::Second]
            .into_iter()
            .find(|s| self.boards[s.index()].is_defeated())
        {
            GameStatus::Won(loser.opponent())
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the active side make one move.
    pub fn step(&mut self) -> Result<Turn, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::AlreadyEnded);
        }
        let side = self.active;
        let target = &mut self.boards[side.opponent().index()];
        let shot = self.players[side.index()]
            .make_move(target)
            .ok_or(GameError::SourceClosed { side })?;
        self.moves += 1;
        log::debug!("{} fired at {}: {:?}", side, shot.target, shot.outcome);

        if !shot.continues() {
            self.active = side.opponent();
        }
        self.status = self.evaluate();
        let winner = self.winner();
        if let Some(w) = winner {
            log::info!(
                "{} ({}) wins after {} moves",
                w,
                self.players[w.index()].name(),
                self.moves
            );
        }
        Ok(Turn { side, shot, winner })
    }

    /// Step until someone wins.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.step()?.winner {
                return Ok(winner);
            }
        }
    }

    /// Take the boards and players back, e.g. to inspect them after the game.
    pub fn into_parts(self) -> ([Player; 2], [Board; 2]) {
        (self.players, self.boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, Orientation, ShotOutcome, Vessel};
    use crate::player::ScriptedSource;

    /// 4×4 board with a single 2-cell vessel at (0,0)-(0,1).
    fn small_board() -> Board {
        let mut board = Board::new(4, 1);
        board
            .place_vessel(Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();
        board.begin_play();
        board
    }

    fn scripted(name: &str, targets: &[(i32, i32)]) -> Player {
        Player::new(name, ScriptedSource::new(targets.iter().copied()))
    }

    #[test]
    fn miss_flips_and_hit_keeps_the_turn() {
        let players = [
            scripted("a", &[(3, 3), (0, 0), (0, 1)]),
            scripted("b", &[(0, 0), (3, 3)]),
        ];
        let mut game = Game::new(players, [small_board(), small_board()], Side::First);

        let t = game.step().unwrap();
        assert_eq!((t.side, t.shot.outcome), (Side::First, ShotOutcome::Miss));
        assert_eq!(game.active(), Side::Second);

        let t = game.step().unwrap();
        assert_eq!((t.side, t.shot.outcome), (Side::Second, ShotOutcome::Hit));
        assert_eq!(game.active(), Side::Second);

        let t = game.step().unwrap();
        assert_eq!(t.shot.outcome, ShotOutcome::Miss);
        assert_eq!(game.active(), Side::First);

        let t = game.step().unwrap();
        assert_eq!(t.shot.outcome, ShotOutcome::Hit);
        assert_eq!(t.winner, None);
        let t = game.step().unwrap();
        assert_eq!(t.shot.outcome, ShotOutcome::Sunk);
        assert_eq!(t.winner, Some(Side::First));
        assert_eq!(game.status(), GameStatus::Won(Side::First));
        assert_eq!(game.moves(), 5);
        assert_eq!(game.step(), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn sink_keeps_the_turn_until_the_fleet_is_gone() {
        let mut two = Board::new(4, 2);
        two.place_vessel(Vessel::new(Coordinate::new(0, 0), 1, Orientation::Vertical))
            .unwrap();
        two.place_vessel(Vessel::new(Coordinate::new(3, 3), 1, Orientation::Vertical))
            .unwrap();
        two.begin_play();
        let players = [scripted("a", &[(0, 0), (3, 3)]), scripted("b", &[])];
        let mut game = Game::new(players, [small_board(), two], Side::First);

        let t = game.step().unwrap();
        assert_eq!(t.shot.outcome, ShotOutcome::Sunk);
        assert_eq!(t.winner, None);
        assert_eq!(game.active(), Side::First);
        assert_eq!(game.run(), Ok(Side::First));
        assert_eq!(game.board(Side::Second).destroyed(), 2);
    }

    #[test]
    fn closed_source_aborts() {
        let players = [scripted("a", &[]), scripted("b", &[])];
        let mut game = Game::new(players, [small_board(), small_board()], Side::Second);
        assert_eq!(
            game.step(),
            Err(GameError::SourceClosed { side: Side::Second })
        );
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
