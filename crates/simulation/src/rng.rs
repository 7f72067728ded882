//! The engine's single random stream.
//!
//! Every probabilistic rule draws from one seeded ChaCha stream so that
//! a fixed seed reproduces a whole run tick for tick.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub(crate) struct Dice {
    stream: ChaCha8Rng,
}

impl Dice {
    pub fn from_entropy() -> Self {
        Dice {
            stream: ChaCha8Rng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Dice {
            stream: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Percentage roll: true with probability `pct`/100.
    pub fn chance(&mut self, pct: u16) -> bool {
        if pct == 0 {
            return false;
        }
        self.stream.random_range(1..=100) <= pct
    }

    /// Uniform draw from the inclusive range [lo, hi].
    pub fn range(&mut self, lo: u16, hi: u16) -> u16 {
        self.stream.random_range(lo..=hi)
    }

    /// Fair left/right preference: -1 or 1.
    pub fn flip(&mut self) -> i32 {
        if self.stream.random() {
            1
        } else {
            -1
        }
    }
}
