use serde::{Deserialize, Serialize};

/// Whether the player has uncovered, flagged, or not yet touched a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverState {
    #[default]
    Covered,
    Flagged,
    Revealed,
}

/// One grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) cover: CoverState,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    /// Number of mines among the neighbors. Meaningless for a mine cell.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn cover(self) -> CoverState {
        self.cover
    }

    pub const fn is_covered(self) -> bool {
        matches!(self.cover, CoverState::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.cover, CoverState::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.cover, CoverState::Revealed)
    }
}

/// What the display layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    WronglyFlagged,
    Revealed(u8),
    ExposedMine,
}

impl CellView {
    /// Whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        use CellView::*;
        match self {
            Hidden => true,
            Flagged => true,
            WronglyFlagged => true,
            Revealed(_) => false,
            ExposedMine => false,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
