#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod minefield;
mod tile;
mod types;

/// Board dimensions and mine count, validated on construction.
///
/// Deserializing goes through [`GameConfig::new`], so an invalid board is rejected there too.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    /// The classic 16x16 board with 40 mines.
    pub const REFERENCE: Self = Self::new_unchecked((16, 16), 40);

    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects boards without cells, without mines, or without a single safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        if mines >= area(size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Unvalidated wire shape of a [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
    /// Every flag is already placed, the cell stays covered.
    NoFlagsLeft,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use FlagOutcome::*;
        match self {
            NoChange => false,
            Flagged => true,
            Unflagged => true,
            NoFlagsLeft => false,
        }
    }
}

/// Outcome of revealing a cell
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
