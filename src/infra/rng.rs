use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::engine::RandomSource;

/// Криптостойкий RNG операционной системы. Для боевых столов.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        OsRng.gen_range(0..upper)
    }

    fn next_id(&mut self) -> u64 {
        OsRng.next_u64()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же колоды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn next_id(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
