use std::collections::HashSet;

use minefield_core::{Coord2, RenderPort, ValidationError, ViewDiff, ViewModel};

/// What the component draws, as last published by the render sync.
#[derive(Debug, Default)]
pub(crate) struct Screen {
    view: ViewModel,
    /// Cells uncovered by the latest partial update, they fade in.
    fresh: HashSet<Coord2>,
    notice: Option<String>,
}

impl Screen {
    pub(crate) fn view(&self) -> &ViewModel {
        &self.view
    }

    pub(crate) fn is_fresh(&self, coords: Coord2) -> bool {
        self.fresh.contains(&coords)
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl RenderPort for Screen {
    fn publish_view(&mut self, view: &ViewModel, diff: &ViewDiff) {
        log::trace!("publish view {:?}", diff);
        self.fresh = diff
            .changed_cells()
            .map(|cells| cells.iter().copied().collect())
            .unwrap_or_default();
        self.view = view.clone();
        self.notice = None;
    }

    fn notify(&mut self, error: &ValidationError) {
        self.notice = Some(format!("Oh, behave! {error}."));
    }
}
