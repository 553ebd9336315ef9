use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Last column must be a letter between A and Z")]
    InvalidColumn,
    #[error("Last row must be at least 1")]
    InvalidRow,
    #[error("Too many mines, at most {max} fit around any first move")]
    TooManyMines { max: u32 },
    #[error("Seed must be non-zero when mines are requested")]
    ZeroSeed,
    #[error("Random range must not be empty")]
    EmptyRange,
    #[error("Coordinates are outside the board")]
    NotFound,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mine count does not match configuration")]
    MineCountMismatch,
    #[error("Mines were already placed")]
    MinesAlreadyPlaced,
}

impl GameError {
    /// Whether the error comes from a malformed argument rather than a lookup.
    pub const fn is_invalid_argument(self) -> bool {
        use GameError::*;
        match self {
            InvalidColumn | InvalidRow | TooManyMines { .. } | ZeroSeed | EmptyRange
            | InvalidBoardShape | MineCountMismatch => true,
            NotFound | MinesAlreadyPlaced => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
