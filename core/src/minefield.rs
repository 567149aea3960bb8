use alloc::{format, string::String, vec::Vec};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only a new generation goes back to InProgress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Everything a display needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: Coord,
    pub cols: Coord,
    pub status: GameStatus,
    pub status_text: String,
    pub flags_remaining: CellCount,
    /// Row-major, `rows * cols` entries.
    pub cells: Vec<CellView>,
}

impl BoardView {
    pub fn cell(&self, (row, col): Coord2) -> CellView {
        self.cells[linear_index((row, col), (self.rows, self.cols))]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Minefield {
    config: GameConfig,
    cells: Array2<Cell>,
    flags_remaining: CellCount,
    revealed_safe: CellCount,
    status: GameStatus,
}

impl Minefield {
    /// Lays out a fresh board, drawing mine positions from `picker`.
    pub fn generate(config: GameConfig, picker: impl CellPicker) -> Self {
        let mut field = Self::empty(config);
        field.place_mines(picker);
        field
    }

    /// Builds a board with mines at exactly the given (possibly repeated) indices.
    pub fn from_mine_indices(size: Coord2, mine_indices: &[CellIndex]) -> Result<Self> {
        let mut field = Self::empty(GameConfig::new_unchecked(size, 0));
        let mut placed: CellCount = 0;
        for &index in mine_indices {
            let coords = field.validate_index(index)?;
            if field.place_mine(coords) {
                placed += 1;
            }
        }

        field.config = GameConfig::new(size, placed)?;
        field.flags_remaining = placed;
        Ok(field)
    }

    /// Starts a new game on the same configuration.
    pub fn regenerate(&mut self, picker: impl CellPicker) {
        self.cells.fill(Cell::default());
        self.flags_remaining = self.config.mines();
        self.revealed_safe = 0;
        self.status = GameStatus::InProgress;
        self.place_mines(picker);
    }

    fn empty(config: GameConfig) -> Self {
        Self {
            config,
            cells: Array2::default(nd(config.size())),
            flags_remaining: config.mines(),
            revealed_safe: 0,
            status: GameStatus::InProgress,
        }
    }

    fn place_mines(&mut self, mut picker: impl CellPicker) {
        let cell_count = self.cell_count();
        let mut placed: CellCount = 0;

        while placed < self.config.mines() {
            let index = picker.pick(cell_count);
            let Some(coords) = coords_of(index, self.size()) else {
                log::warn!(
                    "Discarded out of range pick {} for a board of {} cells",
                    index,
                    cell_count
                );
                continue;
            };
            if self.place_mine(coords) {
                placed += 1;
            }
        }

        log::debug!(
            "Generated {}x{} minefield with {} mines",
            self.config.rows(),
            self.config.cols(),
            placed
        );
    }

    /// Returns false when the cell already holds a mine.
    fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[nd(coords)];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        // counts on mine cells are never read, keep them zero so equal layouts compare equal
        cell.adjacent_mines = 0;

        for pos in self.iter_neighbors(coords) {
            let neighbor = &mut self.cells[nd(pos)];
            if !neighbor.is_mine {
                neighbor.adjacent_mines += 1;
            }
        }
        true
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn cell_count(&self) -> CellIndex {
        self.cells.len()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn index_of(&self, coords: Coord2) -> Result<CellIndex> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(linear_index(coords, self.size()))
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        coords_of(index, self.size()).ok_or(GameError::InvalidIndex)
    }

    pub fn cell(&self, index: CellIndex) -> Result<Cell> {
        let coords = self.validate_index(index)?;
        Ok(self.cells[nd(coords)])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// In-bounds neighbors of `coords`. Does not borrow the board.
    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_index(index)?;
        if self.status.is_finished() {
            return Ok(NoChange);
        }

        let cell = &mut self.cells[nd(coords)];
        if !cell.is_covered() {
            return Ok(NoChange);
        }
        cell.cover = CoverState::Revealed;

        if cell.is_mine {
            log::debug!("Mine revealed at {:?}, game lost", coords);
            self.status = GameStatus::Lost;
            return Ok(HitMine);
        }

        let adjacent_mines = cell.adjacent_mines;
        self.revealed_safe += 1;
        if adjacent_mines == 0 {
            self.flood_from(coords);
        }

        if self.revealed_safe == self.config.safe_cells() {
            log::debug!("All safe cells revealed, game won");
            self.status = GameStatus::Won;
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    /// Reveals the connected zero region around `origin` and its numbered border.
    ///
    /// A cell leaves `Covered` before its neighbors are queued, so each cell is revealed
    /// at most once. Flagged cells are left alone.
    fn flood_from(&mut self, origin: Coord2) {
        let mut to_visit: Vec<Coord2> = self.covered_neighbors(origin).collect();

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[nd(coords)];
            if !cell.is_covered() {
                continue;
            }
            // neighbors of a zero cell are never mines
            cell.cover = CoverState::Revealed;
            let adjacent_mines = cell.adjacent_mines;
            self.revealed_safe += 1;

            if adjacent_mines == 0 {
                to_visit.extend(self.covered_neighbors(coords));
            }
        }
    }

    fn covered_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_neighbors(coords)
            .filter(move |&pos| self.cells[nd(pos)].is_covered())
    }

    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<FlagOutcome> {
        use CoverState::*;

        let coords = self.validate_index(index)?;
        if self.status.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.cells[nd(coords)];
        Ok(match cell.cover {
            Covered if self.flags_remaining == 0 => FlagOutcome::NoFlagsLeft,
            Covered => {
                cell.cover = Flagged;
                self.flags_remaining -= 1;
                FlagOutcome::Flagged
            }
            Flagged => {
                cell.cover = Covered;
                self.flags_remaining += 1;
                FlagOutcome::Unflagged
            }
            Revealed => FlagOutcome::NoChange,
        })
    }

    pub fn cell_view(&self, index: CellIndex) -> Result<CellView> {
        Ok(self.view_of(self.cell(index)?))
    }

    /// Per-cell views in row-major order.
    pub fn cell_views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().map(move |&cell| self.view_of(cell))
    }

    fn view_of(&self, cell: Cell) -> CellView {
        use CoverState::*;

        if !self.status.is_finished() {
            return match cell.cover {
                Covered => CellView::Hidden,
                Flagged => CellView::Flagged,
                Revealed => CellView::Revealed(cell.adjacent_mines),
            };
        }

        match (cell.is_mine, cell.cover) {
            (true, Flagged) => CellView::Flagged,
            (true, Covered | Revealed) => CellView::ExposedMine,
            (false, Flagged) => CellView::WronglyFlagged,
            (false, Covered) => CellView::Hidden,
            (false, Revealed) => CellView::Revealed(cell.adjacent_mines),
        }
    }

    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}", self.flags_remaining),
            GameStatus::Won => String::from("Game won"),
            GameStatus::Lost => String::from("Game lost"),
        }
    }

    pub fn view(&self) -> BoardView {
        let (rows, cols) = self.size();
        BoardView {
            rows,
            cols,
            status: self.status,
            status_text: self.status_text(),
            flags_remaining: self.flags_remaining,
            cells: self.cell_views().collect(),
        }
    }
}
