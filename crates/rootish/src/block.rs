//! Fixed-length storage blocks.
//!
//! A [`Block`] is one independently allocated run of `Option<T>` slots.
//! Its length is fixed at creation (block `b` has `b + 1` slots) and never
//! changes; the stack only ever appends or drops whole blocks.

use crate::layout::block_len;

/// A single fixed-length block of optional slots.
///
/// Slots hold `None` when no element lives there. Clearing a slot drops
/// the element it held, so a block never keeps a removed value alive.
pub(crate) struct Block<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Block<T> {
    /// Create the block with number `block`, all slots empty.
    pub(crate) fn new(block: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None)
                .take(block_len(block))
                .collect(),
        }
    }

    /// Number of slots (occupied or not).
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Shared reference to the element at `offset`, if the slot is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.len()`.
    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.slots[offset].as_ref()
    }

    /// Mutable reference to the element at `offset`, if the slot is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.len()`.
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.slots[offset].as_mut()
    }

    /// The raw slot at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= self.len()`.
    pub(crate) fn slot_mut(&mut self, offset: usize) -> &mut Option<T> {
        &mut self.slots[offset]
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// All slots in offset order.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// All slots in offset order, mutably.
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Consume the block, yielding its slots in offset order.
    pub(crate) fn into_slots(self) -> std::vec::IntoIter<Option<T>> {
        self.slots.into_vec().into_iter()
    }
}
