use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session status. `Won` and `Lost` are terminal, nothing leaves them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a mark toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of a reveal. `Continue` covers no-ops and ordinary safe reveals;
/// the terminal variants mirror the status transition they caused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
}

impl RevealOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from generation to win or loss: the board, the player-visible
/// grid, and the running counters. Replaced wholesale on restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    grid: Array2<Cell>,
    status: GameStatus,
    mark_mode: MarkMode,
    opened_count: CellCount,
    flags_placed: CellCount,
    tags_placed: CellCount,
}

impl GameSession {
    /// Starts a fresh game with a random mine layout.
    pub fn new_game(difficulty: Difficulty) -> Result<Self> {
        Self::new_game_seeded(difficulty, rand::random())
    }

    /// Starts a fresh game with a reproducible mine layout.
    pub fn new_game_seeded(difficulty: Difficulty, seed: u64) -> Result<Self> {
        let config = difficulty.config()?;
        Ok(Self::new(RandomBoardGenerator::new(seed).generate(config)))
    }

    /// Wraps an existing board with zeroed counters and `InProgress` status.
    pub fn new(board: Board) -> Self {
        log::debug!(
            "new session: {}x{}, {} mines",
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        let grid = Array2::default(board.size().nd());
        Self {
            board,
            grid,
            status: GameStatus::default(),
            mark_mode: MarkMode::default(),
            opened_count: 0,
            flags_placed: 0,
            tags_placed: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            rows: self.board.rows(),
            cols: self.board.cols(),
            mines: self.board.mine_count(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn rows(&self) -> Axis {
        self.board.rows()
    }

    pub fn cols(&self) -> Axis {
        self.board.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn cell_at(&self, pos: GridPos) -> Cell {
        self.grid[pos.nd()]
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    pub fn tags_placed(&self) -> CellCount {
        self.tags_placed
    }

    /// Display value for the mine counter; negative when overflagged.
    pub fn mines_remaining(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flags_placed as isize)
    }

    pub fn mark_mode(&self) -> MarkMode {
        self.mark_mode
    }

    pub fn set_mark_mode(&mut self, mode: MarkMode) {
        self.mark_mode = mode;
    }

    /// Opens a cell. Out-of-range coordinates fail fast; everything else
    /// that cannot be opened (terminal session, opened or flagged cell) is
    /// a `Continue` no-op. Tagged cells open normally, the tag is advisory.
    pub fn reveal(&mut self, pos: GridPos) -> Result<RevealOutcome> {
        let pos = self.board.validate(pos)?;

        if self.status.is_finished() {
            return Ok(RevealOutcome::Continue);
        }
        match self.grid[pos.nd()] {
            Cell::Flagged | Cell::Open(_) | Cell::Mine => return Ok(RevealOutcome::Continue),
            Cell::Hidden | Cell::Tagged => {}
        }

        if self.board.is_mine(pos) {
            log::debug!("mine hit at {pos:?}");
            self.grid[pos.nd()] = Cell::Mine;
            self.status = GameStatus::Lost;
            self.reveal_all_mines();
            return Ok(RevealOutcome::Lost);
        }

        self.open_cell(pos);
        if self.board.adjacent_mines(pos) == 0 {
            self.flood_fill(pos);
        }

        Ok(if self.opened_count == self.board.safe_cell_count() {
            self.status = GameStatus::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        })
    }

    /// Toggles the marker selected by the session's current mark mode.
    pub fn toggle_mark(&mut self, pos: GridPos) -> Result<MarkOutcome> {
        self.toggle_mark_with(pos, self.mark_mode)
    }

    /// Toggles a flag or tag. Flags and tags are mutually exclusive: a cell
    /// carrying the other marker is skipped, not an error. Opened cells and
    /// terminal sessions are no-ops as well.
    pub fn toggle_mark_with(&mut self, pos: GridPos, mode: MarkMode) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let pos = self.board.validate(pos)?;

        if self.status.is_finished() {
            return Ok(NoChange);
        }

        Ok(match (mode, self.grid[pos.nd()]) {
            (MarkMode::Flag, Cell::Flagged) => {
                self.grid[pos.nd()] = Cell::Hidden;
                self.flags_placed -= 1;
                Changed
            }
            (MarkMode::Flag, Cell::Hidden) => {
                self.grid[pos.nd()] = Cell::Flagged;
                self.flags_placed += 1;
                Changed
            }
            (MarkMode::Tag, Cell::Tagged) => {
                self.grid[pos.nd()] = Cell::Hidden;
                self.tags_placed -= 1;
                Changed
            }
            (MarkMode::Tag, Cell::Hidden) => {
                self.grid[pos.nd()] = Cell::Tagged;
                self.tags_placed += 1;
                Changed
            }
            _ => NoChange,
        })
    }

    fn open_cell(&mut self, pos: GridPos) {
        let count = self.board.adjacent_mines(pos);
        log::trace!("opened {pos:?}, adjacent mines: {count}");
        self.grid[pos.nd()] = Cell::Open(count);
        self.opened_count += 1;
    }

    /// Work-list expansion of a zero-adjacency region. The grid state itself
    /// is the visited marker: anything already open is never re-opened, and
    /// flagged cells act as barriers. Iterative so deep regions on large
    /// boards cannot exhaust the stack.
    fn flood_fill(&mut self, start: GridPos) {
        let mut visited = HashSet::from([start]);
        let mut to_visit: VecDeque<_> = self
            .board
            .neighbors(start)
            .filter(|&pos| !self.grid[pos.nd()].is_open())
            .collect();
        log::trace!("flood fill from {start:?}, frontier: {to_visit:?}");

        while let Some(pos) = to_visit.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            match self.grid[pos.nd()] {
                Cell::Flagged | Cell::Open(_) | Cell::Mine => continue,
                Cell::Hidden | Cell::Tagged => {}
            }

            self.open_cell(pos);

            if self.board.adjacent_mines(pos) == 0 {
                to_visit.extend(
                    self.board
                        .neighbors(pos)
                        .filter(|&p| matches!(self.grid[p.nd()], Cell::Hidden | Cell::Tagged))
                        .filter(|p| !visited.contains(p)),
                );
            }
        }
    }

    /// End-of-game display: every mined cell is shown. Counters and the
    /// already-decided status are left untouched.
    fn reveal_all_mines(&mut self) {
        let (rows, cols) = self.board.size();
        for row in 0..rows {
            for col in 0..cols {
                if self.board.is_mine((row, col)) {
                    self.grid[(row, col).nd()] = Cell::Mine;
                }
            }
        }
    }
}
