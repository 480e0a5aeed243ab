use serde::{Deserialize, Serialize};

/// Single board axis, used for row/column indices and board dimensions.
pub type Axis = u8;

/// Area-sized count, used for cell and mine totals.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type GridPos = (Axis, Axis);

/// Converts a position into an `ndarray` index.
pub trait GridIndex {
    fn nd(self) -> [usize; 2];
}

impl GridIndex for GridPos {
    fn nd(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(rows: Axis, cols: Axis) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

/// Marker the next mark toggle applies, selectable by the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkMode {
    #[default]
    Flag,
    Tag,
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 neighbors of `pos`, clipped at the board edges.
pub fn neighbors(pos: GridPos, bounds: GridPos) -> impl Iterator<Item = GridPos> {
    OFFSETS
        .into_iter()
        .filter_map(move |delta| step(pos, delta, bounds))
}

fn step((row, col): GridPos, (dr, dc): (i8, i8), (rows, cols): GridPos) -> Option<GridPos> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(pos: GridPos, bounds: GridPos) -> Vec<GridPos> {
        neighbors(pos, bounds).collect()
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        assert_eq!(collect((0, 0), (4, 4)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(collect((3, 3), (4, 4)).len(), 3);
    }

    #[test]
    fn edge_cells_have_five_neighbors() {
        assert_eq!(collect((0, 2), (4, 4)).len(), 5);
        assert_eq!(collect((2, 0), (4, 4)).len(), 5);
    }

    #[test]
    fn interior_cells_have_eight_neighbors() {
        assert_eq!(collect((1, 1), (4, 4)).len(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }
}
