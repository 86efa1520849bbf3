use thiserror::Error;

use crate::CellCount;

/// Why a requested game cannot be started.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Board must be at least 2 cells wide")]
    TooNarrow,
    #[error("Board must be at least 2 cells tall")]
    TooShort,
    #[error("Board is too large, at most {max} cells are supported")]
    TooLarge { max: CellCount },
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, at most {max} fit on this board")]
    TooManyMines { max: CellCount },
}

pub type Result<T> = core::result::Result<T, ValidationError>;
