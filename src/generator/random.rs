use super::*;
use ndarray::Array2;
use rand::prelude::*;

/// Rejected samples tolerated per board cell before giving up on sampling.
const MAX_REJECTED_PER_CELL: u64 = 32;

/// Uniform rejection-sampling mine placement: draw `(row, col)` pairs,
/// resample anything already mined, stop once the requested count is placed.
///
/// Expected draws are `cells / (cells - mines)` per mine, so this is cheap
/// for every playable density. A safety cap bounds the adversarial case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
    rejected_per_cell: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rejected_per_cell: MAX_REJECTED_PER_CELL,
        }
    }

    /// Overrides the per-cell rejected-sample budget. A budget of zero
    /// skips sampling entirely and forces the row-major fallback.
    pub fn with_rejection_budget(mut self, rejected_per_cell: u64) -> Self {
        self.rejected_per_cell = rejected_per_cell;
        self
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let mut mines: Array2<bool> = Array2::default(config.size().nd());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut placed: CellCount = 0;
        let mut budget = self.rejected_per_cell * u64::from(config.total_cells());
        while placed < config.mines && budget > 0 {
            let pos: GridPos = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.cols),
            );
            if mines[pos.nd()] {
                budget -= 1;
                continue;
            }
            mines[pos.nd()] = true;
            placed += 1;
        }

        // Near-full boards can exhaust the sampling budget; finish by taking
        // free cells in row-major order so the count still comes out exact.
        if placed < config.mines {
            log::warn!(
                "mine sampling hit its cap at {placed}/{} placed, filling remaining free cells",
                config.mines
            );
            for cell in mines.iter_mut() {
                if placed == config.mines {
                    break;
                }
                if !*cell {
                    *cell = true;
                    placed += 1;
                }
            }
        }

        Board::from_mine_mask(mines)
    }
}
