use minas_core::Coordinate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal,
    ToggleFlag,
}

impl Action {
    pub const fn tag(self) -> char {
        match self {
            Self::Reveal => 'L',
            Self::ToggleFlag => 'M',
        }
    }
}

/// A single driver step, written as `<COL><ROW>:<ACTION>` (`M03:L`, `V01:M`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub coord: Coordinate,
    pub action: Action,
    /// Coordinates as the player typed them, echoed back in messages.
    pub notation: String,
}

impl Move {
    pub fn new(coord: Coordinate, action: Action) -> Self {
        Self {
            coord,
            action,
            notation: coord.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Move is missing its action, expected something like `M03:L`")]
    MissingAction,
    #[error("Move must start with a column letter")]
    MissingColumn,
    #[error("Invalid row number `{0}`")]
    InvalidRow(String),
    #[error("Unknown action `{0}`, expected `L`/`reveal` or `M`/`flag`")]
    UnknownAction(String),
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coord, action) = s.trim().split_once(':').ok_or(MoveParseError::MissingAction)?;

        let mut chars = coord.chars();
        let col = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(MoveParseError::MissingColumn)?
            .to_ascii_uppercase();
        let row = chars.as_str();
        let row = row
            .parse::<u16>()
            .map_err(|_| MoveParseError::InvalidRow(row.to_owned()))?;

        let action = match action {
            "L" | "l" | "reveal" => Action::Reveal,
            "M" | "m" | "flag" => Action::ToggleFlag,
            other => return Err(MoveParseError::UnknownAction(other.to_owned())),
        };

        Ok(Self {
            coord: Coordinate::new(col, row),
            action,
            notation: coord.to_owned(),
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.notation, self.action.tag())
    }
}
