use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement by rejection sampling: pick any cell, retry if it already
/// holds a mine. Configs never ask for more than half of the board, so the
/// expected number of retries per mine stays below two.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator {
    rng: SmallRng,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(&mut self, config: GameConfig) -> Board {
        let size @ (width, height) = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        let total = config.total_cells();
        let mut mines_left = config.mines();
        if mines_left > total {
            log::warn!("Cannot fit {} mines in {} cells", mines_left, total);
            mines_left = total;
        }
        let mut draws: u64 = 0;
        while mines_left > 0 {
            let coords = (
                self.rng.random_range(0..width),
                self.rng.random_range(0..height),
            );
            draws += 1;

            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_left -= 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws",
            config.mines(),
            width,
            height,
            draws
        );
        Board::from_mine_mask(size, &mine_mask)
    }
}
