use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    letter::{Cell, EMPTY_CELL_CHAR, Letter, cell_to_char},
    shape::ShapeKind,
};

/// Largest side length of any block in any rotation.
pub const BLOCK_MAX_SIDE: usize = 3;

/// Identifier of a generated block instance, unique within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{_0}")]
pub struct BlockId(pub u64);

/// A letter-filled polyomino generated from a [`ShapeKind`] template.
///
/// The letter grid is `height × width` and always fits a
/// [`BLOCK_MAX_SIDE`]-square bounding box. Rotation mutates the grid in place:
/// the shape transposes and letters travel with their cells.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Block, BlockId, ShapeKind};
///
/// let mut block = Block::from_ascii(BlockId(0), ShapeKind::Triple, "C\nA\nT");
/// assert_eq!((block.height(), block.width()), (3, 1));
///
/// block.rotate_clockwise();
/// assert_eq!((block.height(), block.width()), (1, 3));
/// assert_eq!(block.to_string(), "TAC");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    kind: ShapeKind,
    height: usize,
    width: usize,
    cells: [[Cell; BLOCK_MAX_SIDE]; BLOCK_MAX_SIDE],
}

impl Block {
    /// Generates a block from `kind`'s mask, drawing one letter per filled cell.
    ///
    /// `pick` receives the letters already placed in this block so it can avoid
    /// repeating them.
    pub fn generate<F>(id: BlockId, kind: ShapeKind, mut pick: F) -> Self
    where
        F: FnMut(&[Letter]) -> Letter,
    {
        let mask = kind.mask();
        let mut used = ArrayVec::<Letter, { BLOCK_MAX_SIDE * BLOCK_MAX_SIDE }>::new();
        let mut cells = [[None; BLOCK_MAX_SIDE]; BLOCK_MAX_SIDE];
        for (mask_row, cell_row) in mask.iter().zip(&mut cells) {
            for (&filled, cell) in mask_row.iter().zip(cell_row) {
                if filled {
                    let letter = pick(&used);
                    used.push(letter);
                    *cell = Some(letter);
                }
            }
        }
        Self {
            id,
            kind,
            height: mask.len(),
            width: mask.first().map_or(0, |row| row.len()),
            cells,
        }
    }

    /// Creates a block from ASCII art for testing.
    ///
    /// Rows are separated by newlines; `.` is an empty cell and `A`–`Z` are
    /// letters. The grid does not have to match `kind`'s spawn orientation.
    ///
    /// # Panics
    ///
    /// Panics if the art is not rectangular, exceeds [`BLOCK_MAX_SIDE`], or
    /// contains other characters.
    #[must_use]
    pub fn from_ascii(id: BlockId, kind: ShapeKind, art: &str) -> Self {
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(lines.len() <= BLOCK_MAX_SIDE, "too many block rows");
        let width = lines.first().map_or(0, |line| line.chars().count());
        assert!(width <= BLOCK_MAX_SIDE, "too many block columns");

        let mut cells = [[None; BLOCK_MAX_SIDE]; BLOCK_MAX_SIDE];
        for (r, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "block row {r} has wrong width");
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = if ch == EMPTY_CELL_CHAR {
                    None
                } else {
                    Some(Letter::new(ch).unwrap_or_else(|| panic!("invalid block cell {ch:?}")))
                };
            }
        }
        Self {
            id,
            kind,
            height: lines.len(),
            width,
            cells,
        }
    }

    #[must_use]
    pub fn id(&self) -> BlockId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, col)`, or `None` outside the letter grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[row][col])
    }

    /// Iterates over the rows of the letter grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.height]
            .iter()
            .map(move |row| &row[..self.width])
    }

    /// Iterates over filled cells as `(row, col, letter)`, relative to the block origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, Letter)> + '_ {
        self.rows().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|letter| (r, c, letter)))
        })
    }

    /// Returns the letters of the block in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.filled_cells().map(|(_, _, letter)| letter)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled_cells().next().is_none()
    }

    /// Rotates the block 90° clockwise in place.
    ///
    /// An `R×C` grid becomes `C×R` with `rotated[c][R-1-r] = original[r][c]`.
    /// Zero-size blocks are left unchanged.
    pub fn rotate_clockwise(&mut self) {
        if self.height == 0 || self.width == 0 {
            return;
        }
        let mut rotated = [[None; BLOCK_MAX_SIDE]; BLOCK_MAX_SIDE];
        for r in 0..self.height {
            for c in 0..self.width {
                rotated[c][self.height - 1 - r] = self.cells[r][c];
            }
        }
        self.cells = rotated;
        (self.height, self.width) = (self.width, self.height);
    }

    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let mut block = *self;
        block.rotate_clockwise();
        block
    }

    /// Returns working copies in all four orientations (0°, 90°, 180°, 270°).
    ///
    /// Element `i` equals this block rotated clockwise `i` times; `self` is untouched.
    #[must_use]
    pub fn rotations(&self) -> ArrayVec<Self, 4> {
        let mut rotations = ArrayVec::new();
        let mut current = *self;
        for _ in 0..4 {
            rotations.push(current);
            current.rotate_clockwise();
        }
        rotations
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("letters", &format_args!("{self}"))
            .finish()
    }
}

/// Formats the letter grid with rows separated by `/` and `.` for empty cells.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for &cell in row {
                write!(f, "{}", cell_to_char(cell))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn sorted_letters(block: &Block) -> Vec<Letter> {
        let mut letters: Vec<_> = block.letters().collect();
        letters.sort();
        letters
    }

    fn sample_blocks() -> Vec<Block> {
        vec![
            Block::from_ascii(BlockId(1), ShapeKind::Single, "A"),
            Block::from_ascii(BlockId(2), ShapeKind::Double, "AB"),
            Block::from_ascii(BlockId(3), ShapeKind::Triple, "C\nA\nT"),
            Block::from_ascii(BlockId(4), ShapeKind::Square, "AB\nCD"),
            Block::from_ascii(BlockId(5), ShapeKind::LThree, "A.\nBC"),
            Block::from_ascii(BlockId(6), ShapeKind::LFour, "A.\nB.\nCD"),
        ]
    }

    #[test]
    fn test_generate_follows_mask_without_repeats() {
        let alphabet: Vec<Letter> = ('A'..='Z').map(letter).collect();
        for kind in ShapeKind::ALL {
            let block = Block::generate(BlockId(0), kind, |used| {
                *alphabet.iter().find(|l| !used.contains(l)).unwrap()
            });
            assert_eq!(block.height(), kind.mask().len());
            assert_eq!(block.width(), kind.mask()[0].len());
            for (r, mask_row) in kind.mask().iter().enumerate() {
                for (c, &filled) in mask_row.iter().enumerate() {
                    assert_eq!(block.cell(r, c).unwrap().is_some(), filled);
                }
            }
            let letters = sorted_letters(&block);
            let mut unique = letters.clone();
            unique.dedup();
            assert_eq!(letters.len(), kind.cell_count());
            assert_eq!(unique, letters);
        }
    }

    #[test]
    fn test_rotate_triple() {
        let mut block = Block::from_ascii(BlockId(0), ShapeKind::Triple, "C\nA\nT");
        block.rotate_clockwise();
        assert_eq!(block.to_string(), "TAC");
        block.rotate_clockwise();
        assert_eq!(block.to_string(), "T/A/C");
    }

    #[test]
    fn test_rotate_l_shape() {
        let mut block = Block::from_ascii(BlockId(0), ShapeKind::LFour, "A.\nB.\nCD");
        block.rotate_clockwise();
        assert_eq!(block.to_string(), "CBA/D..");
        block.rotate_clockwise();
        assert_eq!(block.to_string(), "DC/.B/.A");
        block.rotate_clockwise();
        assert_eq!(block.to_string(), "..D/ABC");
    }

    #[test]
    fn test_four_rotations_are_identity_and_preserve_letters() {
        for block in sample_blocks() {
            let mut rotated = block;
            for _ in 0..4 {
                rotated.rotate_clockwise();
                assert_eq!(sorted_letters(&rotated), sorted_letters(&block));
            }
            assert_eq!(rotated, block);
        }
    }

    #[test]
    fn test_rotations_leave_original_untouched() {
        let block = Block::from_ascii(BlockId(7), ShapeKind::LThree, "A.\nBC");
        let rotations = block.rotations();
        assert_eq!(rotations.len(), 4);
        assert_eq!(rotations[0], block);
        assert_eq!(rotations[1], block.rotated_clockwise());
        assert_eq!(rotations[2], block.rotated_clockwise().rotated_clockwise());
        assert_eq!(block.to_string(), "A./BC");
    }

    #[test]
    fn test_rotate_empty_block_is_noop() {
        let mut block = Block::from_ascii(BlockId(0), ShapeKind::Single, "");
        block.rotate_clockwise();
        assert_eq!((block.height(), block.width()), (0, 0));
        assert!(block.is_empty());
    }

    #[test]
    fn test_filled_cells_skip_holes() {
        let block = Block::from_ascii(BlockId(0), ShapeKind::LThree, "A.\nBC");
        let cells: Vec<_> = block.filled_cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0, letter('A')), (1, 0, letter('B')), (1, 1, letter('C'))]
        );
        assert_eq!(block.cell(0, 1), Some(None));
        assert_eq!(block.cell(2, 0), None);
    }
}
