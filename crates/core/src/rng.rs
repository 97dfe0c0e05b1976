use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded random source injected into every sampling path. Carrying the seed
/// keeps runs reproducible and lets reports echo it back.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index into a non-empty slice of the given length.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
