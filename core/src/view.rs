use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What an uncovered cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Blank,
    Number(u8),
    Mine,
}

impl Label {
    pub const MINE_GLYPH: &'static str = "\u{2739}";

    pub const fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Mine => Self::Mine,
            Cell::Clue(0) => Self::Blank,
            Cell::Clue(count) => Self::Number(count),
        }
    }

    /// Text drawn inside the cell.
    pub const fn text(self) -> &'static str {
        const DIGITS: [&str; 9] = ["", "1", "2", "3", "4", "5", "6", "7", "8"];
        match self {
            Self::Blank => "",
            Self::Number(count) if (count as usize) < DIGITS.len() => DIGITS[count as usize],
            Self::Number(_) => "?",
            Self::Mine => Self::MINE_GLYPH,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCell {
    pub covered: bool,
    /// Only set once the cell is uncovered.
    pub label: Option<Label>,
}

impl ViewCell {
    pub const COVERED: Self = Self {
        covered: true,
        label: None,
    };

    pub const fn uncovered(label: Label) -> Self {
        Self {
            covered: false,
            label: Some(label),
        }
    }
}

/// End-of-game message shown over the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Victory,
    GameOver,
}

impl Banner {
    pub const fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::Playing => None,
            Status::Won => Some(Self::Victory),
            Status::Lost => Some(Self::GameOver),
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Victory => "Victory",
            Self::GameOver => "Game Over",
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Declarative description of everything a view layer draws.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    size: Coord2,
    cells: Array2<ViewCell>,
    banner: Option<Banner>,
}

/// Derives the view purely from game state.
pub fn derive_view(board: &Board, revealed: &Array2<bool>, status: Status) -> ViewModel {
    let size = board.size();
    let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
        let coords = (x as Coord, y as Coord);
        if revealed[coords.to_nd_index()] {
            ViewCell::uncovered(Label::from_cell(board[coords]))
        } else {
            ViewCell::COVERED
        }
    });

    ViewModel {
        size,
        cells,
        banner: Banner::for_status(status),
    }
}

impl ViewModel {
    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    /// Out of bounds cells read as covered.
    pub fn cell_at(&self, coords: Coord2) -> ViewCell {
        if in_bounds(coords, self.size) {
            self.cells[coords.to_nd_index()]
        } else {
            ViewCell::COVERED
        }
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, ViewCell)> + '_ {
        iter_coords(self.size).map(|coords| (coords, self.cells[coords.to_nd_index()]))
    }

    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.covered).count()
    }

    /// Reconciles this view against the previously published one.
    pub fn diff(&self, previous: &ViewModel) -> ViewDiff {
        if self.size != previous.size {
            return ViewDiff::Full;
        }

        let cells = self
            .iter_cells()
            .filter(|&(coords, cell)| previous.cells[coords.to_nd_index()] != cell)
            .map(|(coords, _)| coords)
            .collect();

        ViewDiff::Partial {
            cells,
            banner_changed: self.banner != previous.banner,
        }
    }
}

/// Which parts of a view changed since the last publish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewDiff {
    /// Redraw everything, the board was replaced.
    Full,
    Partial {
        cells: Vec<Coord2>,
        banner_changed: bool,
    },
}

impl ViewDiff {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Full => false,
            Self::Partial {
                cells,
                banner_changed,
            } => cells.is_empty() && !banner_changed,
        }
    }

    /// Cells touched by a partial update, `None` for a full redraw.
    pub fn changed_cells(&self) -> Option<&[Coord2]> {
        match self {
            Self::Full => None,
            Self::Partial { cells, .. } => Some(cells),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use crate::testing::*;

    #[test]
    fn fresh_game_is_fully_covered_without_banner() {
        let game = preset_game((3, 2), &[(0, 0)]);

        let view = game.view();

        assert_eq!(view.size(), (3, 2));
        assert_eq!(view.covered_count(), 6);
        assert_eq!(view.banner(), None);
        assert!(view.iter_cells().all(|(_, cell)| cell == ViewCell::COVERED));
    }

    #[test]
    fn uncovered_cells_carry_labels() {
        let mut game = preset_game((3, 3), &[(2, 2)]);
        game.reveal((1, 1));
        game.reveal((0, 0));

        let view = game.view();

        assert_eq!(view.cell_at((1, 1)), ViewCell::uncovered(Label::Number(1)));
        assert_eq!(view.cell_at((0, 0)), ViewCell::uncovered(Label::Blank));
        assert_eq!(view.cell_at((2, 2)), ViewCell::COVERED);
        assert_eq!(view.banner(), Some(Banner::Victory));
        assert_eq!(view.banner().map(Banner::text), Some("Victory"));
    }

    #[test]
    fn lost_game_shows_mine_and_game_over() {
        let mut game = preset_game((2, 2), &[(0, 1)]);
        game.reveal((0, 1));

        let view = game.view();

        assert_eq!(view.cell_at((0, 1)).label, Some(Label::Mine));
        assert_eq!(view.banner(), Some(Banner::GameOver));
        assert_eq!(Banner::GameOver.text(), "Game Over");
        assert_eq!(Banner::GameOver.to_string(), "Game Over");
        assert_eq!(view.covered_count(), 3);
    }

    #[test]
    fn label_text_matches_clue() {
        assert_eq!(Label::Blank.text(), "");
        assert_eq!(Label::Number(3).text(), "3");
        assert_eq!(Label::Number(8).text(), "8");
        assert_eq!(Label::Mine.text(), Label::MINE_GLYPH);
    }

    #[test]
    fn diff_lists_only_changed_cells() {
        let mut game = preset_game((4, 1), &[(3, 0)]);
        let before = game.view();

        game.reveal((2, 0));
        let after = game.view();

        assert_eq!(
            after.diff(&before),
            ViewDiff::Partial {
                cells: alloc::vec![(2, 0)],
                banner_changed: false
            }
        );
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn diff_flags_banner_and_resize() {
        let mut game = preset_game((2, 1), &[(0, 0)]);
        let before = game.view();

        game.reveal((1, 0));
        let diff = game.view().diff(&before);

        assert_eq!(diff.changed_cells(), Some(&[(1, 0)][..]));
        assert!(matches!(
            diff,
            ViewDiff::Partial {
                banner_changed: true,
                ..
            }
        ));

        let other = preset_game((3, 3), &[(0, 0)]).view();
        assert_eq!(other.diff(&before), ViewDiff::Full);
        assert_eq!(ViewDiff::Full.changed_cells(), None);
    }

    #[test]
    fn view_serializes_for_transport() {
        let mut game = preset_game((2, 2), &[(0, 0)]);
        game.reveal((1, 1));

        let json = serde_json::to_value(game.view()).unwrap();

        assert_eq!(json["size"], serde_json::json!([2, 2]));
        assert_eq!(json["banner"], serde_json::Value::Null);
        assert_eq!(
            json["cells"]["data"][3],
            serde_json::json!({"covered": false, "label": {"Number": 1}})
        );
    }
}
