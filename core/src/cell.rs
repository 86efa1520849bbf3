use serde::{Deserialize, Serialize};

/// Content of a board cell, fixed when the game is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Number of mines among the in-bounds neighbors, `0..=8`.
    Clue(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Zero clues are the ones that cascade on reveal.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Clue(0))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Clue(0)
    }
}
