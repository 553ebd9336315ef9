use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense grid of cells covering every coordinate of [`Bounds`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    bounds: Bounds,
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct BoardData {
    bounds: Bounds,
    cells: Array2<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        let board = Self {
            bounds: data.bounds,
            cells: data.cells,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Every cell starts covered and mine-free.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: Array2::default(bounds.to_nd_index()),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Checks the cell grid has exactly one cell per coordinate of the bounds.
    pub fn validate(&self) -> Result<()> {
        let [cols, rows] = self.bounds.to_nd_index();
        if self.cells.dim() != (cols, rows) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }

    pub fn get(&self, coord: Coordinate) -> Result<&Cell> {
        self.cell(coord).ok_or(GameError::NotFound)
    }

    pub fn get_mut(&mut self, coord: Coordinate) -> Result<&mut Cell> {
        let index = self.bounds.index_of(coord).ok_or(GameError::NotFound)?;
        Ok(&mut self.cells[index])
    }

    /// Tolerant lookup: `None` for anything off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.bounds.index_of(coord).map(|index| &self.cells[index])
    }

    pub fn count_adjacent_mines(&self, coord: Coordinate) -> u8 {
        coord
            .neighbors(self.bounds)
            .filter(|&pos| self.cell(pos).is_some_and(|cell| cell.is_mine))
            .count()
            .try_into()
            .unwrap()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        let bounds = self.bounds;
        self.cells.indexed_iter().filter_map(move |((col, row), cell)| {
            bounds.coordinate_at([col, row]).map(|coord| (coord, cell))
        })
    }

    pub fn mines(&self) -> impl Iterator<Item = Coordinate> {
        self.iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(coord, _)| coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn count_flags(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged())
    }

    pub fn count_uncovered(&self) -> CellCount {
        self.count_where(|cell| cell.is_uncovered())
    }

    /// True once no safe cell is left covered or flagged.
    pub fn all_safe_uncovered(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_pending())
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|&cell| pred(cell))
            .count()
            .try_into()
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn board(last_col: char, last_row: u16) -> Board {
        Board::new(Bounds::new(last_col, last_row).unwrap())
    }

    #[test]
    fn new_board_is_fully_covered_and_mine_free() {
        let board = board('E', 5);

        assert_eq!(board.iter().count(), 25);
        assert!(board
            .iter()
            .all(|(_, cell)| !cell.is_mine && cell.visibility == Visibility::Covered));
        assert_eq!(board.mine_count(), 0);
        assert_eq!(board.count_flags(), 0);
    }

    #[test]
    fn lookup_outside_board_is_not_found() {
        let mut board = board('C', 3);

        assert_eq!(board.get(Coordinate::new('D', 1)), Err(GameError::NotFound));
        assert_eq!(board.get(Coordinate::new('A', 0)), Err(GameError::NotFound));
        assert!(board.get_mut(Coordinate::new('A', 4)).is_err());
        assert!(board.cell(Coordinate::new('C', 4)).is_none());
        assert!(board.get(Coordinate::new('C', 3)).is_ok());
    }

    #[test]
    fn counts_adjacent_mines_at_edges() {
        let mut board = board('C', 3);
        board.get_mut(Coordinate::new('A', 1)).unwrap().is_mine = true;
        board.get_mut(Coordinate::new('B', 2)).unwrap().is_mine = true;

        assert_eq!(board.count_adjacent_mines(Coordinate::new('A', 2)), 2);
        assert_eq!(board.count_adjacent_mines(Coordinate::new('C', 3)), 1);
        assert_eq!(board.count_adjacent_mines(Coordinate::new('B', 2)), 1);
        assert_eq!(board.mine_count(), 2);
        assert!(board.mines().eq([Coordinate::new('A', 1), Coordinate::new('B', 2)]));
    }

    #[test]
    fn restored_board_must_match_its_bounds() {
        let json = serde_json::to_string(&board('B', 2)).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board('B', 2));

        let mut value = serde_json::to_value(board('B', 2)).unwrap();
        value["bounds"]["last_col"] = "E".into();
        value["bounds"]["last_row"] = 5.into();
        let err = serde_json::from_value::<Board>(value).unwrap_err();
        assert!(err.to_string().contains("Board shape"), "{}", err);
    }

    #[test]
    fn win_check_ignores_mines() {
        let mut board = board('B', 1);
        board.get_mut(Coordinate::new('A', 1)).unwrap().is_mine = true;
        assert!(!board.all_safe_uncovered());

        board.get_mut(Coordinate::new('B', 1)).unwrap().visibility = Visibility::Uncovered;
        assert!(board.all_safe_uncovered());
        assert_eq!(board.count_uncovered(), 1);
    }
}
