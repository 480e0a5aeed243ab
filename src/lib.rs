use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use ui::*;

mod cell;
mod error;
mod generator;
mod session;
mod types;
mod ui;

/// Board shape and mine budget for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Axis,
    pub cols: Axis,
    pub mines: CellCount,
}

impl GameConfig {
    /// Validates `0 < mines < rows * cols`, the generator precondition.
    pub fn new(rows: Axis, cols: Axis, mines: CellCount) -> Result<Self> {
        let cells = area(rows, cols);
        if cells == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 || mines >= cells {
            return Err(GameError::InvalidMineCount { mines, cells });
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn size(&self) -> GridPos {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.cols)
    }
}

/// Fixed preset table plus a free-form escape hatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom {
        rows: Axis,
        cols: Axis,
        mines: CellCount,
    },
}

impl Difficulty {
    pub fn config(self) -> Result<GameConfig> {
        match self {
            Self::Easy => GameConfig::new(8, 8, 10),
            Self::Medium => GameConfig::new(10, 10, 15),
            Self::Hard => GameConfig::new(16, 16, 40),
            Self::Custom { rows, cols, mines } => GameConfig::new(rows, cols, mines),
        }
    }
}

/// Mine layout of one game, with adjacency counts precomputed at
/// generation time. Immutable for the lifetime of the session that owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mines: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
}

impl Board {
    pub(crate) fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines.iter().filter(|&&mined| mined).count() as CellCount;
        let adjacency = compute_adjacency(&mines);
        Self {
            mines,
            adjacency,
            mine_count,
        }
    }

    /// Builds a board from an explicit mine list, mainly for tests.
    pub fn from_mine_coords(size: GridPos, mine_coords: &[GridPos]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.nd());
        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mines[pos.nd()] = true;
        }
        Ok(Self::from_mine_mask(mines))
    }

    pub fn size(&self) -> GridPos {
        let (rows, cols) = self.mines.dim();
        (rows as Axis, cols as Axis)
    }

    pub fn rows(&self) -> Axis {
        self.size().0
    }

    pub fn cols(&self) -> Axis {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_mine(&self, pos: GridPos) -> bool {
        self.mines[pos.nd()]
    }

    /// Precomputed adjacent-mine count; meaningful only off mined cells.
    pub fn adjacent_mines(&self, pos: GridPos) -> u8 {
        self.adjacency[pos.nd()]
    }

    pub fn validate(&self, pos: GridPos) -> Result<GridPos> {
        let (rows, cols) = self.size();
        if pos.0 < rows && pos.1 < cols {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub(crate) fn neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + use<> {
        neighbors(pos, self.size())
    }
}

fn compute_adjacency(mines: &Array2<bool>) -> Array2<u8> {
    let dim = mines.dim();
    let bounds = (dim.0 as Axis, dim.1 as Axis);
    let mut adjacency: Array2<u8> = Array2::default(dim);

    for row in 0..bounds.0 {
        for col in 0..bounds.1 {
            let pos = (row, col);
            if mines[pos.nd()] {
                continue;
            }
            adjacency[pos.nd()] = neighbors(pos, bounds).filter(|&p| mines[p.nd()]).count() as u8;
        }
    }

    adjacency
}
