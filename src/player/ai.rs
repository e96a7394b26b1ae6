use core::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::Coordinate;

use super::MoveSource;

/// Computer opponent: fires at uniformly random cells, paying no attention
/// to what it already tried. The board rejects repeats and the player simply
/// asks again.
pub struct RandomSource {
    rng: SmallRng,
    delay: Duration,
}

impl RandomSource {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            delay: Duration::ZERO,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Pause for `delay` before every target so a human can follow along.
    /// Purely cosmetic; ignored without the `std` feature.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl MoveSource for RandomSource {
    fn next_target(&mut self, board_size: usize) -> Option<Coordinate> {
        if board_size == 0 {
            return None;
        }
        #[cfg(feature = "std")]
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let Ok(size) = i32::try_from(board_size) else {
            log::warn!("board size {} has no signed coordinates", board_size);
            return None;
        };
        Some(Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        ))
    }
}
