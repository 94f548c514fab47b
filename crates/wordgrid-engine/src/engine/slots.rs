use crate::Block;

pub const SLOT_COUNT: usize = 3;

/// The three choosable slots holding blocks awaiting placement.
///
/// A slot is empty only between consuming its block and refilling it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoosableSlots {
    slots: [Option<Block>; SLOT_COUNT],
}

impl ChoosableSlots {
    pub const LEN: usize = SLOT_COUNT;

    #[must_use]
    pub fn new(blocks: [Block; SLOT_COUNT]) -> Self {
        Self {
            slots: blocks.map(Some),
        }
    }

    /// Returns the block in slot `index`, or `None` if the slot is empty or
    /// does not exist.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Puts `block` into slot `index`, returning the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`SLOT_COUNT`].
    pub fn replace(&mut self, index: usize, block: Block) -> Option<Block> {
        self.slots[index].replace(block)
    }

    /// Empties slot `index`, returning its block.
    pub fn take(&mut self, index: usize) -> Option<Block> {
        self.slots.get_mut(index)?.take()
    }

    /// Iterates over all slots in order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Block>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates over `(index, block)` for the occupied slots.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Block)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|block| (i, block)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockId, ShapeKind};

    fn block(id: u64) -> Block {
        Block::from_ascii(BlockId(id), ShapeKind::Single, "A")
    }

    #[test]
    fn test_take_and_replace() {
        let mut slots = ChoosableSlots::new([block(0), block(1), block(2)]);
        assert_eq!(slots.occupied().count(), 3);

        let taken = slots.take(1).unwrap();
        assert_eq!(taken.id(), BlockId(1));
        assert!(slots.get(1).is_none());
        assert_eq!(slots.occupied().map(|(i, _)| i).collect::<Vec<_>>(), [0, 2]);

        assert!(slots.replace(1, block(3)).is_none());
        assert_eq!(slots.get(1).map(Block::id), Some(BlockId(3)));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut slots = ChoosableSlots::new([block(0), block(1), block(2)]);
        assert!(slots.get(3).is_none());
        assert!(slots.get_mut(usize::MAX).is_none());
        assert!(slots.take(3).is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let slots = ChoosableSlots::default();
        assert!(slots.iter().all(|slot| slot.is_none()));
    }
}
