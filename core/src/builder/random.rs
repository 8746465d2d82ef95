use super::*;

/// Uniform A-Z filler seeded explicitly, so "incidental" letters are
/// reproducible when a test or a replay needs them to be.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridFiller {
    seed: u64,
}

impl RandomGridFiller {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridFiller for RandomGridFiller {
    fn fill(self, grid: &mut Array2<u8>) {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for cell in grid.iter_mut() {
            if *cell == UNSET {
                *cell = b'A' + rng.random_range(0..26);
            }
        }
    }
}
