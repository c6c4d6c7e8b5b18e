//! Deterministic RNG wrapper for synthetic workloads.
//!
//! Workload generators and randomized tests must be reproducible: the same
//! seed yields the same operation stream on every platform.  `SmallRng`
//! seeded via `seed_from_u64` gives that within one `rand` version.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used to generate scheduler workloads.
///
/// Used only in single-threaded contexts.  Two generators built from the same
/// seed produce identical streams.
pub struct WorkloadRng(SmallRng);

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        WorkloadRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
