//! Seeded draws.
//!
//! A game takes every random decision (the opening deal and each later draw)
//! from its own `GameRng`. Seeding it makes a whole session reproducible,
//! replays included:
//!
//! ```
//! use rust_timeline::core::GameRng;
//!
//! let pool = ["Magna Carta", "Printing press", "Moon landing"];
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&pool), b.choose(&pool));
//!
//! // The next game of the session draws from a derived stream
//! assert_eq!(a.fork().seed(), b.fork().seed());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment spacing the seeds of successive forks.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random source owned by a single game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Stream seeded from the OS, for unseeded sessions.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the stream for the next game of a session.
    ///
    /// The n-th fork of a given seed always yields the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform pick from `pool`; `None` when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        pool.choose(&mut self.inner)
    }
}
