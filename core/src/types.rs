use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// A board position: column letter plus 1-based row number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub col: char,
    pub row: u16,
}

impl Coordinate {
    pub const fn new(col: char, row: u16) -> Self {
        Self { col, row }
    }

    pub fn neighbors(self, bounds: Bounds) -> NeighborIter {
        NeighborIter::new(self, bounds)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.col, self.row)
    }
}

/// The board rectangle `A..=last_col` by `1..=last_row`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoundsData")]
pub struct Bounds {
    last_col: char,
    last_row: u16,
}

#[derive(Deserialize)]
struct BoundsData {
    last_col: char,
    last_row: u16,
}

impl TryFrom<BoundsData> for Bounds {
    type Error = GameError;

    fn try_from(data: BoundsData) -> Result<Self> {
        Self::new(data.last_col, data.last_row)
    }
}

impl Bounds {
    pub fn new(last_col: char, last_row: u16) -> Result<Self> {
        if !last_col.is_ascii_uppercase() {
            return Err(GameError::InvalidColumn);
        }
        if last_row == 0 {
            return Err(GameError::InvalidRow);
        }
        Ok(Self { last_col, last_row })
    }

    pub const fn last_col(&self) -> char {
        self.last_col
    }

    pub const fn last_row(&self) -> u16 {
        self.last_row
    }

    pub const fn cols(&self) -> u16 {
        (self.last_col as u32 - 'A' as u32 + 1) as u16
    }

    pub const fn rows(&self) -> u16 {
        self.last_row
    }

    pub const fn total_cells(&self) -> CellCount {
        self.cols() as CellCount * self.rows() as CellCount
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        ('A'..=self.last_col).contains(&coord.col) && (1..=self.last_row).contains(&coord.row)
    }

    /// Array index of `coord` as `[column offset, row offset]`.
    pub fn index_of(&self, coord: Coordinate) -> Option<[usize; 2]> {
        self.contains(coord).then(|| {
            [
                (coord.col as u32 - 'A' as u32) as usize,
                usize::from(coord.row - 1),
            ]
        })
    }

    pub fn coordinate_at(&self, [col, row]: [usize; 2]) -> Option<Coordinate> {
        let col = char::from_u32('A' as u32 + u32::try_from(col).ok()?)?;
        let row = u16::try_from(row).ok()?.checked_add(1)?;
        let coord = Coordinate::new(col, row);
        self.contains(coord).then_some(coord)
    }

    pub(crate) const fn to_nd_index(self) -> [usize; 2] {
        [self.cols() as usize, self.rows() as usize]
    }

    /// Every coordinate in column-major order (`A1`, `A2`, ..., `B1`, ...).
    pub fn iter(self) -> impl Iterator<Item = Coordinate> {
        ('A'..=self.last_col)
            .flat_map(move |col| (1..=self.last_row).map(move |row| Coordinate::new(col, row)))
    }
}

/// Offsets as `(column delta, row delta)`, in the order neighbors are yielded.
const DISPLACEMENTS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Applies `delta` to `coord`, returning a value only when it remains in bounds.
fn apply_delta(coord: Coordinate, delta: (i32, i32), bounds: Bounds) -> Option<Coordinate> {
    let (dc, dr) = delta;

    let next_col = char::from_u32((coord.col as u32).checked_add_signed(dc)?)?;
    let next_row = coord.row.checked_add_signed(dr.try_into().ok()?)?;
    let next = Coordinate::new(next_col, next_row);

    bounds.contains(next).then_some(next)
}

/// Grid-adjacent coordinates of `coord` clipped to `A..=last_col` by `1..=last_row`.
pub fn neighbors(coord: Coordinate, last_col: char, last_row: u16) -> NeighborIter {
    NeighborIter::new(coord, Bounds { last_col, last_row })
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coordinate,
    bounds: Bounds,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coordinate, bounds: Bounds) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
