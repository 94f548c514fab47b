use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoardParseError, PlacementError};

use super::{
    block::Block,
    letter::{Cell, EMPTY_CELL_CHAR, Letter, cell_to_char},
};

pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 9;

/// A board coordinate. `(0, 0)` is the top-left cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position if it lies on the board.
    #[must_use]
    pub const fn checked(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_HEIGHT && col < BOARD_WIDTH {
            Some(Self { row, col })
        } else {
            None
        }
    }
}

/// The fixed 9×9 letter grid.
///
/// The board is mutated only through placement, clearing, and swapping.
/// [`Board::place`] does no checking of its own; callers validate with
/// [`Board::can_place`] or [`Board::check_placement`] first.
///
/// Serializes as its rows joined by `/`, with `.` for empty cells.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Block, BlockId, Board, ShapeKind};
///
/// let mut board = Board::EMPTY;
/// let block = Block::from_ascii(BlockId(0), ShapeKind::Double, "HI");
///
/// assert!(board.can_place(&block, 0, 7));
/// assert!(!board.can_place(&block, 0, 8)); // out of bounds
///
/// board.place(&block, 0, 7);
/// assert!(!board.can_place(&block, 0, 6)); // overlaps
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
    };

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        CellPos::checked(row, col).map(|pos| self.cell(pos))
    }

    pub fn set(&mut self, pos: CellPos, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions() -> impl Iterator<Item = CellPos> {
        (0..BOARD_HEIGHT).flat_map(|row| (0..BOARD_WIDTH).map(move |col| CellPos::new(row, col)))
    }

    /// Positions of the occupied cells in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        Self::positions().filter(|&pos| self.cell(pos).is_some())
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_WIDTH * BOARD_HEIGHT
    }

    #[must_use]
    pub fn row_has_letters(&self, row: usize) -> bool {
        self.cells[row].iter().any(Option::is_some)
    }

    #[must_use]
    pub fn column_has_letters(&self, col: usize) -> bool {
        self.cells.iter().any(|row| row[col].is_some())
    }

    /// Checks that every filled cell of `block`, placed with its top-left at
    /// `(origin_row, origin_col)`, lands on an empty in-bounds board cell.
    ///
    /// Reports the first offending cell in the block's row-major order.
    pub fn check_placement(
        &self,
        block: &Block,
        origin_row: usize,
        origin_col: usize,
    ) -> Result<(), PlacementError> {
        for (r, c, _) in block.filled_cells() {
            let row = origin_row + r;
            let col = origin_col + c;
            let Some(cell) = self.get(row, col) else {
                return Err(PlacementError::OutOfBounds { row, col });
            };
            if cell.is_some() {
                return Err(PlacementError::Overlap { row, col });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn can_place(&self, block: &Block, origin_row: usize, origin_col: usize) -> bool {
        self.check_placement(block, origin_row, origin_col).is_ok()
    }

    /// Writes the block's letters onto the board.
    ///
    /// This is a pure mutation: the placement must already have been validated
    /// with [`Self::can_place`]. Filled cells that land outside the board panic.
    pub fn place(&mut self, block: &Block, origin_row: usize, origin_col: usize) {
        debug_assert!(self.can_place(block, origin_row, origin_col));
        for (r, c, letter) in block.filled_cells() {
            self.cells[origin_row + r][origin_col + c] = Some(letter);
        }
    }

    /// Empties every cell in `row`.
    pub fn clear_row(&mut self, row: usize) {
        self.cells[row].fill(None);
    }

    /// Empties every cell in `col`.
    pub fn clear_column(&mut self, col: usize) {
        for row in &mut self.cells {
            row[col] = None;
        }
    }

    /// Empties each listed cell. Repeated positions are harmless.
    pub fn clear_cells<'a, I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = &'a CellPos>,
    {
        for pos in positions {
            self.set(*pos, None);
        }
    }

    /// Exchanges the contents of two cells, empty or not.
    pub fn swap(&mut self, a: CellPos, b: CellPos) {
        let tmp = self.cell(a);
        self.set(a, self.cell(b));
        self.set(b, tmp);
    }

    /// Creates a board from ASCII art for testing.
    ///
    /// Each non-blank line is one row of exactly 9 characters, `.` for empty
    /// and `A`–`Z` for letters. Missing trailing rows are empty.
    ///
    /// # Panics
    ///
    /// Panics if the art is malformed.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        match Self::from_rows(&rows) {
            Ok(board) => board,
            Err(e) => panic!("invalid board art: {e}"),
        }
    }

    /// Parses a board from up to 9 row strings (see [`Self::from_ascii`]).
    pub fn from_rows<S>(rows: &[S]) -> Result<Self, BoardParseError>
    where
        S: AsRef<str>,
    {
        if rows.len() > BOARD_HEIGHT {
            return Err(BoardParseError::TooManyRows { rows: rows.len() });
        }
        let mut board = Self::EMPTY;
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != BOARD_WIDTH {
                return Err(BoardParseError::RowWidth { row, width });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == EMPTY_CELL_CHAR {
                    continue;
                }
                let letter = Letter::new(ch)
                    .ok_or(BoardParseError::InvalidCell { row, col, ch })?;
                board.cells[row][col] = Some(letter);
            }
        }
        Ok(board)
    }

    /// Returns each row as a string, `.` for empty cells.
    #[must_use]
    pub fn row_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().copied().map(cell_to_char).collect())
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.row_strings()).finish()
    }
}

/// Formats the board as 9 lines of 9 characters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_strings().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "CAT....../........./..." (rows joined by '/')
        serializer.serialize_str(&self.row_strings().join("/"))
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != BOARD_HEIGHT {
            return Err(serde::de::Error::custom(format!(
                "expected {BOARD_HEIGHT} '/'-separated rows, got {}",
                rows.len()
            )));
        }
        Board::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockId, ShapeKind};

    fn block(kind: ShapeKind, art: &str) -> Block {
        Block::from_ascii(BlockId(0), kind, art)
    }

    fn full_board() -> Board {
        Board::from_ascii(&"ABCDEFGHI\n".repeat(BOARD_HEIGHT))
    }

    #[test]
    fn test_empty_board() {
        let board = Board::EMPTY;
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(Board::positions().count(), 81);
        assert_eq!(board.get(9, 0), None);
        assert_eq!(board.get(8, 8), Some(None));
    }

    #[test]
    fn test_can_place_matches_bounds_and_occupancy() {
        let shapes = [
            block(ShapeKind::Single, "A"),
            block(ShapeKind::Triple, "C\nA\nT"),
            block(ShapeKind::Square, "AB\nCD"),
            block(ShapeKind::LFour, "A.\nB.\nCD"),
            block(ShapeKind::LThree, "A.\nBC"),
        ];
        let board = Board::from_ascii(
            "
            .........
            ...X.....
            .........
            ......Y..
            .........
            .........
            ..Z......
            .........
            ........W
            ",
        );

        for shape in &shapes {
            for rotated in shape.rotations() {
                for row in 0..BOARD_HEIGHT + 2 {
                    for col in 0..BOARD_WIDTH + 2 {
                        let expected = rotated.filled_cells().all(|(r, c, _)| {
                            board.get(row + r, col + c).is_some_and(|cell| cell.is_none())
                        });
                        assert_eq!(
                            board.can_place(&rotated, row, col),
                            expected,
                            "{rotated} at ({row}, {col})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_l_shape_hole_may_cover_occupied_cell() {
        let board = Board::from_ascii(".X.......");
        let block = block(ShapeKind::LThree, "A.\nBC");
        assert_eq!(board.cell(CellPos::new(0, 1)), Letter::new('X'));
        assert!(board.can_place(&block, 0, 0));
    }

    #[test]
    fn test_check_placement_reports_first_offending_cell() {
        let board = Board::from_ascii(".........\n.Q.......");
        let triple = block(ShapeKind::Triple, "C\nA\nT");
        assert_eq!(
            board.check_placement(&triple, 0, 1),
            Err(PlacementError::Overlap { row: 1, col: 1 })
        );
        assert_eq!(
            board.check_placement(&triple, 7, 4),
            Err(PlacementError::OutOfBounds { row: 9, col: 4 })
        );
        assert_eq!(board.check_placement(&triple, 2, 1), Ok(()));
    }

    #[test]
    fn test_place_writes_only_filled_cells() {
        let mut board = Board::from_ascii(".X.......");
        board.place(&block(ShapeKind::LThree, "A.\nBC"), 0, 0);
        assert_eq!(board.row_strings()[0], "AX.......");
        assert_eq!(board.row_strings()[1], "BC.......");
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_clear_row_and_column() {
        let mut board = full_board();
        board.clear_row(4);
        assert!(!board.row_has_letters(4));
        assert!(board.row_has_letters(3));
        board.clear_column(0);
        assert!(!board.column_has_letters(0));
        assert!(board.column_has_letters(1));
        assert_eq!(board.occupied_count(), 81 - 9 - 8);

        // Clearing an already empty line is allowed.
        board.clear_row(4);
        assert_eq!(board.occupied_count(), 81 - 9 - 8);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut board = Board::from_ascii("AB.......");
        board.swap(CellPos::new(0, 0), CellPos::new(0, 1));
        assert_eq!(board.row_strings()[0], "BA.......");
        board.swap(CellPos::new(0, 1), CellPos::new(0, 2));
        assert_eq!(board.row_strings()[0], "B.A......");
    }

    #[test]
    fn test_clear_cells_deduplicates_naturally() {
        let mut board = Board::from_ascii("DAD......");
        let positions = [CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(0, 1)];
        board.clear_cells(&positions);
        assert_eq!(board.row_strings()[0], "..D......");
    }

    #[test]
    fn test_full_board() {
        let board = full_board();
        assert!(board.is_full());
        assert!(!board.can_place(&block(ShapeKind::Single, "A"), 0, 0));
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Board::from_rows(&["ABC"]),
            Err(BoardParseError::RowWidth { row: 0, width: 3 })
        );
        assert_eq!(
            Board::from_rows(&["abc......"]),
            Err(BoardParseError::InvalidCell {
                row: 0,
                col: 0,
                ch: 'a'
            })
        );
        assert_eq!(
            Board::from_rows(&vec!["........."; 10]),
            Err(BoardParseError::TooManyRows { rows: 10 })
        );
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_ascii("CAT......\n.........\n....Z....");
        let serialized = serde_json::to_string(&board).unwrap();
        assert_eq!(
            serialized,
            "\"CAT....../........./....Z..../........./........./........./........./........./.........\""
        );
        let deserialized: Board = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, board);

        assert!(serde_json::from_str::<Board>("\"CAT......\"").is_err());
        assert!(
            serde_json::from_str::<Board>(
                "\"cat....../........./........./........./........./........./........./........./.........\""
            )
            .is_err()
        );
    }

    #[test]
    fn test_display() {
        let board = Board::from_ascii("CAT......");
        let text = board.to_string();
        assert_eq!(text.lines().count(), 9);
        assert_eq!(text.lines().next(), Some("CAT......"));
    }
}
