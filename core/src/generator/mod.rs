use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts for new games.
pub trait LayoutGenerator {
    /// Produces a board matching `config`, exactly `config.mines()` mines.
    fn generate(&mut self, config: GameConfig) -> Board;
}
