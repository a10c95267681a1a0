use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded integer source for reproducible layouts
///
/// Every random draw of a session goes through one source, so the seed alone
/// determines the generated grid.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `min..=max`
    ///
    /// Returns `min` when the range is empty.
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}
