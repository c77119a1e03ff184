//! Seedable random source passed explicitly into generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

/// The draws made by room placement and corridor carving
///
/// Generation never touches a process-wide generator; callers hand in a
/// source, which also lets tests script the exact sequence of draws.
pub trait RandomSource {
    /// Uniform integer in the half-open `range` (never called with an empty range)
    fn range(&mut self, range: Range<i32>) -> i32;

    /// Fair coin
    fn coin_flip(&mut self) -> bool;
}

impl RandomSource for StdRng {
    fn range(&mut self, range: Range<i32>) -> i32 {
        self.random_range(range)
    }

    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Deterministic generator for a seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Use the given seed, or derive one from the system clock
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64)
    })
}
