/// How per-action expected values are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvMode {
    /// Sample full rounds with the seeded generator.
    Sampled,
    /// Compose the enumerated dealer distribution.
    Exact,
}

impl EvMode {
    pub fn label(self) -> &'static str {
        match self {
            EvMode::Sampled => "sampled",
            EvMode::Exact => "exact",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub seed: u64,
    pub trials: u32,
    pub batches: u32,
    pub mode: EvMode,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            seed: 0xACE21,
            trials: 100_000,
            batches: 8,
            mode: EvMode::Sampled,
        }
    }
}
