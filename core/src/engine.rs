use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// No mines placed yet, waiting for the first reveal.
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game: the board, the generator driving mine placement, and the first-move latch.
///
/// Mines are placed lazily by the first [`GameEngine::reveal`] that lands on the
/// board, keeping that cell and its neighbors clear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameEngineData")]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    rng: XorShift32,
    mines_placed: bool,
    triggered_mine: Option<Coordinate>,
}

#[derive(Deserialize)]
struct GameEngineData {
    config: GameConfig,
    board: Board,
    rng: XorShift32,
    mines_placed: bool,
    triggered_mine: Option<Coordinate>,
}

impl TryFrom<GameEngineData> for GameEngine {
    type Error = GameError;

    fn try_from(data: GameEngineData) -> Result<Self> {
        let engine = Self {
            config: data.config,
            board: data.board,
            rng: data.rng,
            mines_placed: data.mines_placed,
            triggered_mine: data.triggered_mine,
        };
        engine.validate()?;
        Ok(engine)
    }
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.bounds()?;
        Ok(Self {
            config,
            board: Board::new(bounds),
            rng: XorShift32::new(config.seed),
            mines_placed: false,
            triggered_mine: None,
        })
    }

    /// Checks a restored game is consistent with its own configuration.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        if self.config.bounds()? != self.board.bounds() {
            return Err(GameError::InvalidBoardShape);
        }
        self.board.validate()?;

        let expected_mines = if self.mines_placed {
            self.config.mines
        } else {
            0
        };
        if self.board.mine_count() != expected_mines {
            return Err(GameError::MineCountMismatch);
        }
        if let Some(coord) = self.triggered_mine {
            self.board.get(coord)?;
        }
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.board.bounds()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rng(&self) -> &XorShift32 {
        &self.rng
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn triggered_mine(&self) -> Option<Coordinate> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coord: Coordinate) -> Result<Cell> {
        self.board.get(coord).copied()
    }

    pub fn adjacent_mines(&self, coord: Coordinate) -> Result<u8> {
        self.board.get(coord)?;
        Ok(self.board.count_adjacent_mines(coord))
    }

    pub fn state(&self) -> EngineState {
        if self.game_lost() {
            EngineState::Lost
        } else if !self.mines_placed {
            EngineState::Ready
        } else if self.game_won() {
            EngineState::Won
        } else {
            EngineState::Active
        }
    }

    /// Every safe cell is uncovered; mines may stay covered or flagged.
    pub fn game_won(&self) -> bool {
        self.board.all_safe_uncovered()
    }

    pub fn game_lost(&self) -> bool {
        self.triggered_mine.is_some()
    }

    pub fn count_flags(&self) -> CellCount {
        self.board.count_flags()
    }

    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.count_flags())
    }

    /// Places the configured mines, keeping `anchor` and its neighbors clear.
    ///
    /// Can only succeed once per game.
    pub fn place_mines(&mut self, anchor: Coordinate) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }
        place_mines(&mut self.board, &mut self.rng, anchor, self.config.mines)?;
        self.mines_placed = true;
        Ok(())
    }

    /// Uncovers `coord`, cascading through every connected zero-count cell.
    ///
    /// Covered and flagged cells are both revealable, a flag is simply dropped.
    /// Coordinates off the board and cells already uncovered are left alone.
    pub fn reveal(&mut self, coord: Coordinate) -> RevealOutcome {
        if !self.bounds().contains(coord) {
            log::warn!("Ignoring reveal outside the board at {}", coord);
            return RevealOutcome::NoChange;
        }

        if !self.mines_placed {
            if let Err(err) = self.place_mines(coord) {
                log::error!("Could not place mines around {}: {}", coord, err);
                return RevealOutcome::NoChange;
            }
        }

        match self.uncover(coord) {
            None => RevealOutcome::NoChange,
            Some(true) => {
                self.triggered_mine = Some(coord);
                RevealOutcome::HitMine
            }
            Some(false) => {
                if self.board.count_adjacent_mines(coord) == 0 {
                    let opened = self.flood_fill(coord);
                    log::debug!("Reveal at {} cascaded through {} cells", coord, opened);
                }
                RevealOutcome::Revealed
            }
        }
    }

    /// Covered and flagged swap places, uncovered cells do not change.
    pub fn toggle_flag(&mut self, coord: Coordinate) -> MarkOutcome {
        let Ok(cell) = self.board.get_mut(coord) else {
            log::warn!("Ignoring flag outside the board at {}", coord);
            return MarkOutcome::NoChange;
        };

        match cell.visibility {
            Visibility::Covered => {
                cell.visibility = Visibility::Flagged;
                MarkOutcome::Changed
            }
            Visibility::Flagged => {
                cell.visibility = Visibility::Covered;
                MarkOutcome::Changed
            }
            Visibility::Uncovered => MarkOutcome::NoChange,
        }
    }

    /// Marks the cell uncovered, returning whether it held a mine, or `None` if it
    /// was already uncovered.
    fn uncover(&mut self, coord: Coordinate) -> Option<bool> {
        let cell = self.board.get_mut(coord).ok()?;
        if cell.is_uncovered() {
            return None;
        }
        cell.visibility = Visibility::Uncovered;
        Some(cell.is_mine)
    }

    /// Opens the region around an already uncovered zero-count cell.
    ///
    /// Each coordinate is uncovered at most once, so the worklist drains.
    fn flood_fill(&mut self, origin: Coordinate) -> CellCount {
        let mut opened = 0;
        let mut to_visit: Vec<_> = self.pending_neighbors(origin).collect();

        while let Some(visit) = to_visit.pop() {
            // neighbors of a zero-count cell never hold mines
            if self.uncover(visit).is_none() {
                continue;
            }
            opened += 1;

            if self.board.count_adjacent_mines(visit) == 0 {
                to_visit.extend(self.pending_neighbors(visit));
            }
        }

        opened
    }

    fn pending_neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        coord
            .neighbors(self.bounds())
            .filter(|&pos| self.board.cell(pos).is_some_and(|cell| !cell.is_uncovered()))
    }
}
