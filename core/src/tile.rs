use serde::{Deserialize, Serialize};

/// Player-facing state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Covered,
    Flagged,
    Uncovered,
}

impl Visibility {
    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Covered
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn is_covered(self) -> bool {
        matches!(self.visibility, Visibility::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }

    pub const fn is_uncovered(self) -> bool {
        self.visibility.is_uncovered()
    }

    /// Whether this cell still counts against a win.
    pub const fn is_pending(self) -> bool {
        !self.is_mine && !self.is_uncovered()
    }
}
