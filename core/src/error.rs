use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidSize,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, at least one cell must be safe")]
    TooManyMines,
    #[error("Cell index is outside the board")]
    InvalidIndex,
}

pub type Result<T> = core::result::Result<T, GameError>;
