//! Random source used for speeds, branch choice and cargo spawning

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Uniform integer source
pub trait RandomSource {
    /// Uniform value in `[low, high)`; returns `low` when the range is empty
    fn random_range(&mut self, low: u16, high: u16) -> u16;
}

/// Default random source, seeded for reproducible runs or from the OS
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: StdRng,
}

impl SimRng {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SimRng {
    fn random_range(&mut self, low: u16, high: u16) -> u16 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}
