#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use sync::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod sync;
#[cfg(test)]
mod testing;
mod types;
mod view;

/// Validated board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

/// Wire shape of [`GameConfig`], checked by [`GameConfig::new`] on the way in.
#[derive(Deserialize)]
struct RawGameConfig {
    size: (i64, i64),
    mines: i64,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ValidationError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size.0, raw.size.1, raw.mines)
    }
}

impl GameConfig {
    /// Largest board, in cells, that a new game may ask for.
    pub const MAX_CELLS: CellCount = 256 * 256;

    /// The board shown when the page loads.
    pub const BEGINNER: Self = Self {
        size: (8, 8),
        mines: 10,
    };

    /// Validates raw integers, as they come out of a form, into a config.
    ///
    /// Boards must be at least 2x2 and hold between one mine and half of the
    /// cells (rounded down).
    pub fn new(width: i64, height: i64, mines: i64) -> Result<Self> {
        if width < 2 {
            return Err(ValidationError::TooNarrow);
        }
        if height < 2 {
            return Err(ValidationError::TooShort);
        }
        let (Ok(width), Ok(height)) = (Coord::try_from(width), Coord::try_from(height)) else {
            return Err(ValidationError::TooLarge {
                max: Self::MAX_CELLS,
            });
        };
        if mult(width, height) > Self::MAX_CELLS {
            return Err(ValidationError::TooLarge {
                max: Self::MAX_CELLS,
            });
        }
        if mines < 1 {
            return Err(ValidationError::NoMines);
        }

        let max = Self::max_mines((width, height));
        match CellCount::try_from(mines) {
            Ok(mines) if mines <= max => Ok(Self {
                size: (width, height),
                mines,
            }),
            _ => Err(ValidationError::TooManyMines { max }),
        }
    }

    /// Upper bound on mines for a board of `size`.
    pub const fn max_mines(size: Coord2) -> CellCount {
        mult(size.0, size.1) / 2
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

/// Final cell contents of a generated game: mines and precomputed clues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board with mines at `mine_coords`. Duplicates count once and
    /// out of bounds coordinates are dropped.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Self {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if in_bounds(coords, size) {
                mine_mask[coords.to_nd_index()] = true;
            } else {
                log::warn!("Mine at {:?} is outside a {:?} board", coords, size);
            }
        }

        Self::from_mine_mask(size, &mine_mask)
    }

    /// Computes clues for a mask whose shape is `size`.
    pub(crate) fn from_mine_mask(size: Coord2, mine_mask: &Array2<bool>) -> Self {
        let is_mine = |coords: Coord2| mine_mask[coords.to_nd_index()];

        let mut mine_count = 0;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            if is_mine(coords) {
                mine_count += 1;
                Cell::Mine
            } else {
                let clue = NeighborIter::new(coords, size)
                    .filter(|&pos| is_mine(pos))
                    .count();
                Cell::Clue(clue as u8)
            }
        });

        Self {
            cells,
            size,
            mine_count,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords).then(|| self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// What a single top-level reveal did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
