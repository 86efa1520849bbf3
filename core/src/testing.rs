use alloc::vec::Vec;

use crate::*;

/// Generator that always lays out the same mines, whatever the config says.
#[derive(Clone, Debug)]
pub(crate) struct Preset(pub Vec<Coord2>);

impl LayoutGenerator for Preset {
    fn generate(&mut self, config: GameConfig) -> Board {
        Board::from_mine_coords(config.size(), &self.0)
    }
}

/// Game over a fixed layout. Skips validation so tests can use tiny boards.
pub(crate) fn preset_game(size: Coord2, mines: &[Coord2]) -> GameState<Preset> {
    let config = GameConfig {
        size,
        mines: mines.len() as CellCount,
    };
    GameState::new(Preset(mines.to_vec()), config)
}
