//! Random Source Capability
//! 
//! Simulated readings draw from a shared, seedable source so a run can be
//! reproduced exactly and tests can script the draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// A source of uniform draws.
///
/// Implementors only provide `next_unit`; the range helpers are derived
/// from it. Implementations must be safe to share across request handlers.
pub trait RandomSource: Send + Sync {
    /// Next draw in `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Uniform float between `lo` and `hi`.
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Uniform integer in the inclusive range `[lo, hi]`. Requires `lo <= hi`.
    fn int_in(&self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_unit() * span) as i64;
        lo + offset.clamp(0, hi - lo)
    }
}

impl<'r> dyn RandomSource + 'r {
    /// Uniformly chosen element of `items`, or `None` when it is empty.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.int_in(0, items.len() as i64 - 1) as usize)
    }
}

/// `StdRng` behind a mutex so one generator can serve every handler.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Deterministic stream for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    fn int_in(&self, lo: i64, hi: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(lo..=hi))
    }
}
