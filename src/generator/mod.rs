use crate::*;
pub use random::*;

mod random;

/// Produces the mine layout for a new game.
///
/// Sessions use [`RandomBoardGenerator`]; tests inject fixed layouts
/// through [`Board::from_mine_coords`] instead.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
