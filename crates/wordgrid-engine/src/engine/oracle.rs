use serde::Serialize;

use crate::{BOARD_HEIGHT, BOARD_WIDTH, Block, Board, ChoosableSlots};

/// One way to put a slot's block on the board.
///
/// `rotation` counts clockwise quarter turns from the block's current
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub slot: usize,
    pub rotation: usize,
    pub row: usize,
    pub col: usize,
}

/// Enumerates every legal placement: occupied slot × rotation × origin, in
/// that nesting order.
///
/// Rotations are tried on working copies; the slot blocks are not touched.
pub fn legal_placements<'a>(
    board: &'a Board,
    slots: &'a ChoosableSlots,
) -> impl Iterator<Item = (Placement, Block)> + 'a {
    slots.occupied().flat_map(move |(slot, block)| {
        block
            .rotations()
            .into_iter()
            .enumerate()
            .flat_map(move |(rotation, rotated)| {
                (0..BOARD_HEIGHT)
                    .flat_map(|row| (0..BOARD_WIDTH).map(move |col| (row, col)))
                    .filter(move |&(row, col)| board.can_place(&rotated, row, col))
                    .map(move |(row, col)| {
                        let placement = Placement {
                            slot,
                            rotation,
                            row,
                            col,
                        };
                        (placement, rotated)
                    })
            })
    })
}

/// Returns `true` when no slot block fits anywhere in any rotation.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Block, BlockId, Board, ChoosableSlots, ShapeKind, is_game_over};
///
/// let single = Block::from_ascii(BlockId(0), ShapeKind::Single, "A");
/// let slots = ChoosableSlots::new([single, single, single]);
///
/// assert!(!is_game_over(&Board::EMPTY, &slots));
/// assert!(is_game_over(&Board::from_ascii(&"ABCDEFGHI\n".repeat(9)), &slots));
/// ```
#[must_use]
pub fn is_game_over(board: &Board, slots: &ChoosableSlots) -> bool {
    legal_placements(board, slots).next().is_none()
}
