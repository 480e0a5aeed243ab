use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Hidden,
    /// "Believed mine" marker, blocks reveal.
    Flagged,
    /// Advisory "?" marker, does not block reveal.
    Tagged,
    /// Opened safe cell with its adjacent-mine count.
    Open(u8),
    /// Opened mined cell, shown after the game is lost.
    Mine,
}

impl Cell {
    /// Opened cells never revert to any other state.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_) | Self::Mine)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Flagged | Self::Tagged)
    }
}
