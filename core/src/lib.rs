#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Parameters for a single game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub last_col: char,
    pub last_row: u16,
    pub mines: CellCount,
    pub seed: u32,
}

impl GameConfig {
    pub const fn new_unchecked(last_col: char, last_row: u16, mines: CellCount, seed: u32) -> Self {
        Self {
            last_col,
            last_row,
            mines,
            seed,
        }
    }

    pub fn new(last_col: char, last_row: u16, mines: CellCount, seed: u32) -> Result<Self> {
        let config = Self::new_unchecked(last_col, last_row, mines, seed);
        config.validate()?;
        Ok(config)
    }

    /// Rejects anything that could leave mine placement without a way to finish,
    /// whichever cell the first move lands on.
    pub fn validate(&self) -> Result<()> {
        let max = self.max_mines()?;
        if self.mines > max {
            return Err(GameError::TooManyMines { max });
        }
        if self.mines > 0 && self.seed == 0 {
            return Err(GameError::ZeroSeed);
        }
        Ok(())
    }

    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.last_col, self.last_row)
    }

    pub fn total_cells(&self) -> Result<CellCount> {
        Ok(self.bounds()?.total_cells())
    }

    pub fn max_mines(&self) -> Result<CellCount> {
        let bounds = self.bounds()?;
        Ok(bounds.total_cells() - max_forbidden_zone(bounds))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }

    /// `false` only when the move uncovered a mine.
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::HitMine)
    }
}
