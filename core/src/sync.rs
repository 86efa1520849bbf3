use crate::*;

/// Capability a view layer provides to display a game.
pub trait RenderPort {
    /// Show `view`; `diff` says what changed since the previous publish.
    fn publish_view(&mut self, view: &ViewModel, diff: &ViewDiff);

    /// Surface a rejected new-game request to the player.
    fn notify(&mut self, error: &ValidationError);
}

/// Keeps a [`RenderPort`] in step with a [`GameState`].
///
/// Holds no game logic: gestures are forwarded to the engine and the view is
/// re-derived from state after every change.
#[derive(Debug)]
pub struct RenderSync<P, G = RandomLayoutGenerator> {
    state: GameState<G>,
    port: P,
    last_view: ViewModel,
}

impl<P: RenderPort, G: LayoutGenerator> RenderSync<P, G> {
    /// Takes over `state` and publishes its view right away.
    pub fn new(state: GameState<G>, mut port: P) -> Self {
        let last_view = state.view();
        port.publish_view(&last_view, &ViewDiff::Full);
        Self {
            state,
            port,
            last_view,
        }
    }

    /// Reveals a covered cell of a running game, returns whether the view
    /// was republished.
    pub fn on_cell_click(&mut self, coords: Coord2) -> bool {
        if !self.state.status().is_playing() || !self.last_view.cell_at(coords).covered {
            return false;
        }

        if !self.state.reveal(coords).has_update() {
            return false;
        }

        let view = self.state.view();
        let diff = view.diff(&self.last_view);
        self.publish(view, diff)
    }

    /// Starts a new game, or notifies the port if the request is invalid.
    pub fn on_new_game(&mut self, width: i64, height: i64, mines: i64) -> bool {
        match self.state.new_game(width, height, mines) {
            Ok(()) => {
                let view = self.state.view();
                self.publish(view, ViewDiff::Full)
            }
            Err(err) => {
                log::warn!("Rejected new game {}x{}/{}: {}", width, height, mines, err);
                self.port.notify(&err);
                false
            }
        }
    }

    fn publish(&mut self, view: ViewModel, diff: ViewDiff) -> bool {
        if diff.is_empty() {
            return false;
        }

        self.port.publish_view(&view, &diff);
        self.last_view = view;
        true
    }
}

impl<P, G> RenderSync<P, G> {
    pub fn state(&self) -> &GameState<G> {
        &self.state
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// The view most recently handed to the port.
    pub fn view(&self) -> &ViewModel {
        &self.last_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingPort {
        published: Vec<(ViewModel, ViewDiff)>,
        notices: Vec<ValidationError>,
    }

    impl RenderPort for RecordingPort {
        fn publish_view(&mut self, view: &ViewModel, diff: &ViewDiff) {
            self.published.push((view.clone(), diff.clone()));
        }

        fn notify(&mut self, error: &ValidationError) {
            self.notices.push(*error);
        }
    }

    fn sync(size: Coord2, mines: &[Coord2]) -> RenderSync<RecordingPort, Preset> {
        RenderSync::new(preset_game(size, mines), RecordingPort::default())
    }

    #[test]
    fn publishes_initial_view_in_full() {
        let sync = sync((3, 3), &[(2, 2)]);

        let published = &sync.port().published;
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].1, ViewDiff::Full);
        assert_eq!(published[0].0.covered_count(), 9);
    }

    #[test]
    fn click_reveals_and_publishes_changed_cells() {
        let mut sync = sync((4, 1), &[(0, 0)]);

        assert!(sync.on_cell_click((3, 0)));

        let (view, diff) = sync.port().published.last().unwrap();
        assert_eq!(view.cell_at((3, 0)), ViewCell::uncovered(Label::Blank));
        assert_eq!(view.cell_at((1, 0)), ViewCell::uncovered(Label::Number(1)));
        assert_eq!(view.banner(), Some(Banner::Victory));

        let mut changed = diff.changed_cells().unwrap().to_vec();
        changed.sort();
        assert_eq!(changed, [(1, 0), (2, 0), (3, 0)]);
        assert_eq!(sync.view(), view);
    }

    #[test]
    fn repeated_clicks_publish_once() {
        let mut sync = sync((3, 3), &[(2, 2)]);

        assert!(sync.on_cell_click((1, 1)));
        assert!(!sync.on_cell_click((1, 1)));
        assert!(!sync.on_cell_click((1, 1)));

        assert_eq!(sync.port().published.len(), 2);
        assert_eq!(sync.state().revealed_count(), 1);
    }

    #[test]
    fn clicks_after_loss_are_ignored() {
        let mut sync = sync((3, 3), &[(2, 2)]);

        assert!(sync.on_cell_click((2, 2)));
        assert_eq!(sync.view().banner(), Some(Banner::GameOver));

        assert!(!sync.on_cell_click((0, 0)));
        assert!(!sync.on_cell_click((7, 7)));
        assert_eq!(sync.port().published.len(), 2);
        assert_eq!(sync.state().status(), Status::Lost);
    }

    #[test]
    fn valid_new_game_republishes_covered_board() {
        let mut sync = sync((3, 3), &[(2, 2)]);
        sync.on_cell_click((0, 0));

        assert!(sync.on_new_game(5, 4, 3));

        let (view, diff) = sync.port().published.last().unwrap();
        assert_eq!(diff, &ViewDiff::Full);
        assert_eq!(view.size(), (5, 4));
        assert_eq!(view.covered_count(), 20);
        assert_eq!(view.banner(), None);
    }

    #[test]
    fn invalid_new_game_notifies_and_keeps_board() {
        let mut sync = sync((3, 3), &[(2, 2)]);
        sync.on_cell_click((1, 1));
        let shown = sync.view().clone();

        assert!(!sync.on_new_game(1, 8, 1));
        assert!(!sync.on_new_game(8, 8, 40));

        assert_eq!(
            sync.port().notices,
            [
                ValidationError::TooNarrow,
                ValidationError::TooManyMines { max: 32 }
            ]
        );
        assert_eq!(sync.port().published.len(), 2);
        assert_eq!(sync.view(), &shown);
        assert!(sync.state().is_revealed((1, 1)));
    }

    #[test]
    fn random_beginner_game_plays_to_victory() {
        let mut sync = RenderSync::new(GameState::with_seed(5), RecordingPort::default());

        let safe: Vec<_> = iter_coords(sync.state().size())
            .filter(|&coords| !sync.state().board()[coords].is_mine())
            .collect();
        for coords in safe {
            sync.on_cell_click(coords);
        }

        assert_eq!(sync.state().status(), Status::Won);
        assert_eq!(sync.view().banner(), Some(Banner::Victory));
        assert_eq!(sync.view().covered_count(), 10);
    }
}
