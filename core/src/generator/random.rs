use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform picker backed by any [`rand::Rng`].
#[derive(Clone, Debug)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<SmallRng> {
    /// Reproducible picker, the same seed always lays out the same board.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CellPicker for RandomPicker<R> {
    fn pick(&mut self, cell_count: CellIndex) -> CellIndex {
        self.rng.random_range(0..cell_count)
    }
}
