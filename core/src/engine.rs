use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// A single game instance: the board, which cells are uncovered and how the
/// game stands. Starting a new game swaps all three at once.
#[derive(Clone, Debug)]
pub struct GameState<G = RandomLayoutGenerator> {
    generator: G,
    board: Board,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    status: Status,
}

impl GameState {
    /// Beginner game with mines drawn from a seeded RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomLayoutGenerator::new(seed), GameConfig::default())
    }
}

impl<G: LayoutGenerator> GameState<G> {
    pub fn new(mut generator: G, config: GameConfig) -> Self {
        let board = generator.generate(config);
        let mut state = Self {
            revealed: Array2::default(board.size().to_nd_index()),
            revealed_count: 0,
            status: Status::Playing,
            board,
            generator,
        };
        state.log_start();
        state
    }

    /// Validates the request and replaces the current game. On error nothing
    /// about the current game changes.
    pub fn new_game(&mut self, width: i64, height: i64, mines: i64) -> Result<()> {
        let config = GameConfig::new(width, height, mines)?;
        self.start(config);
        Ok(())
    }

    /// Replaces the current game with a fresh one for `config`.
    pub fn start(&mut self, config: GameConfig) {
        let board = self.generator.generate(config);
        let revealed = Array2::default(board.size().to_nd_index());

        self.board = board;
        self.revealed = revealed;
        self.revealed_count = 0;
        self.status = Status::Playing;
        self.log_start();
    }

    fn log_start(&self) {
        let (width, height) = self.board.size();
        log::debug!(
            "New game: {}x{} with {} mines",
            width,
            height,
            self.board.mine_count()
        );
    }
}

impl<G> GameState<G> {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &Array2<bool> {
        &self.revealed
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Out of bounds cells count as covered.
    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.board.contains(coords) && self.revealed[coords.to_nd_index()]
    }

    /// Derives the player-facing description of this game.
    pub fn view(&self) -> ViewModel {
        derive_view(&self.board, &self.revealed, self.status)
    }

    /// Uncovers a cell, cascading through empty regions.
    ///
    /// Does nothing when the game is over, the cell is already uncovered or
    /// it is not on the board. Win detection runs once, after any cascade.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.status.is_playing() || !self.board.contains(coords) || self.is_revealed(coords) {
            return RevealOutcome::NoChange;
        }

        log::trace!("reveal {:?}", coords);
        self.uncover(coords);

        match self.board[coords] {
            Cell::Mine => {
                log::debug!("Hit mine at {:?}", coords);
                self.status = Status::Lost;
                return RevealOutcome::HitMine;
            }
            Cell::Clue(0) => self.flood_reveal(coords),
            Cell::Clue(_) => {}
        }

        if self.board.total_cells() - self.revealed_count == self.board.mine_count() {
            log::debug!("All {} safe cells revealed", self.revealed_count);
            self.status = Status::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn uncover(&mut self, coords: Coord2) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;
    }

    /// Every neighbor of an empty cell is safe. Cells are uncovered as they
    /// are queued, so the mask keeps each one from entering the queue twice.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(coords) = to_visit.pop_front() {
            for neighbor in self.board.iter_neighbors(coords) {
                if self.revealed[neighbor.to_nd_index()] {
                    continue;
                }

                self.uncover(neighbor);
                if self.board[neighbor].is_empty() {
                    to_visit.push_back(neighbor);
                }
            }
        }
    }
}
