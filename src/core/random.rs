//! Injectable randomness source
//!
//! Generation draws all randomness through [`RandomSource`] so that a
//! fixed seed reproduces an identical world. Draw order is part of the
//! generators' contracts; see the layout modules.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform randomness as consumed by the layout generators.
pub trait RandomSource {
    /// Fair coin flip.
    fn next_bool(&mut self) -> bool;

    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[0, bound)`. `bound` must be non-zero.
    fn next_u32(&mut self, bound: u32) -> u32;
}

/// ChaCha-backed random source.
///
/// Small-round ChaCha is plenty for layout decisions and stays
/// reproducible across platforms.
pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    /// Create a source that will replay the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Create a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy() }
    }
}

impl RandomSource for ChaChaRandom {
    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn next_u32(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}
