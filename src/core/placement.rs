//! Random fleet placement with board-level restarts.

use rand::Rng;

use super::board::Board;
use super::config::Rules;
use super::coord::Coordinate;
use super::ship::{Orientation, Vessel};

/// Try to place the whole fleet on a fresh board within
/// `rules.placement_budget` attempts.
///
/// Every vessel is sampled independently: a random origin anywhere on the
/// board and a random orientation, resampled on rejection. There is no
/// backtracking, so a bad early vessel can use up the budget, in which case
/// `None` is returned, as it is for a board too large for signed
/// coordinates. On success the board has begun play.
pub fn try_random_board<R: Rng>(rules: &Rules, rng: &mut R) -> Option<Board> {
    let size = i32::try_from(rules.board_size).ok()?;
    let mut board = Board::for_rules(rules);
    let mut attempts = 0;
    for &length in &rules.fleet {
        loop {
            attempts += 1;
            if attempts > rules.placement_budget {
                return None;
            }
            let origin = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            let vessel = Vessel::new(origin, length, Orientation::random(rng));
            if board.place_vessel(vessel).is_ok() {
                break;
            }
        }
    }
    board.begin_play();
    Some(board)
}

/// Place the fleet, discarding the board and starting over whenever the
/// attempt budget runs out.
///
/// `rules` should pass [`Rules::validate`]. Even then this only terminates if
/// the fleet can actually be spaced out on the board; the budget bounds each
/// try, not the number of tries.
pub fn random_board<R: Rng>(rules: &Rules, rng: &mut R) -> Board {
    let mut restarts = 0usize;
    loop {
        if let Some(board) = try_random_board(rules, rng) {
            if restarts > 0 {
                log::debug!("fleet placed after {} restarts", restarts);
            }
            return board;
        }
        restarts += 1;
        log::debug!(
            "placement budget of {} exhausted, restarting fleet",
            rules.placement_budget
        );
    }
}
