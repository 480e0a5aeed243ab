use crate::CellCount;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates outside the board")]
    OutOfBounds,
    #[error("mine count {mines} must be greater than 0 and less than {cells}")]
    InvalidMineCount { mines: CellCount, cells: CellCount },
    #[error("board has no cells")]
    EmptyBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
