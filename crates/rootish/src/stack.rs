//! The rootish array stack.
//!
//! Elements live in a list of blocks of sizes 1, 2, 3, ... so that
//! `m` blocks hold `m(m+1)/2` slots. Growth appends exactly one block;
//! shrinking drops trailing blocks once two of them are surplus. Wasted
//! space is therefore O(√n): at most the last two blocks are partly
//! empty, and they hold O(√n) slots.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::block::Block;
use crate::error::StackError;
use crate::layout::{blocks_for_len, locate, shrink_target, triangular, Location};
use crate::metrics::StackMetrics;

/// A growable, randomly indexable sequence with O(√n) wasted space.
///
/// Indexed access is O(1). Insertion and removal at position `i` shift the
/// `len - i` elements after it, so operations at the end are O(1)
/// amortized. Storage grows and shrinks one whole block at a time; an
/// existing block is never resized or moved.
///
/// The stack is a single-owner structure. It holds no interior mutability
/// and is `Send`/`Sync` exactly when `T` is; concurrent mutation needs
/// external locking like any other collection.
pub struct RootishArrayStack<T> {
    /// Block `b` holds `b + 1` slots.
    blocks: Vec<Block<T>>,
    /// Number of elements; slots `0..len` are occupied, all others empty.
    len: usize,
    metrics: StackMetrics,
}

impl<T> RootishArrayStack<T> {
    /// Create an empty stack with no blocks.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
            metrics: StackMetrics::default(),
        }
    }

    /// Number of elements in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots across all blocks.
    pub fn capacity(&self) -> usize {
        triangular(self.blocks.len())
    }

    /// Number of blocks currently allocated.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Cumulative allocation and shift counters.
    pub fn metrics(&self) -> StackMetrics {
        self.metrics
    }

    /// Shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, StackError> {
        let loc = self.check_index(index)?;
        Ok(self.element(loc))
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, StackError> {
        let loc = self.check_index(index)?;
        Ok(self.blocks[loc.block]
            .get_mut(loc.offset)
            .expect("slots below len are occupied"))
    }

    /// Overwrite the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if `index >= len`; `value`
    /// is dropped and the stack is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, StackError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Insert `value` at `index`, shifting every later element up by one.
    ///
    /// `index == len` appends. Grows by at most one block.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if `index > len`; `value`
    /// is dropped and the stack is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), StackError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if self.capacity() < self.len + 1 {
            self.grow();
        }
        self.len += 1;

        // Carry the displaced element forward one slot at a time. The slot
        // at the new last position was empty, so the carry ends as `None`.
        let mut carry = Some(value);
        let mut loc = locate(index);
        for _ in index..self.len {
            carry = mem::replace(self.slot_mut(loc), carry);
            loc = loc.next();
        }
        debug_assert!(carry.is_none(), "slot at len was occupied");

        self.metrics.elements_shifted += (self.len - 1 - index) as u64;
        Ok(())
    }

    /// Append `value` after the last element.
    pub fn push(&mut self, value: T) {
        let len = self.len;
        self.insert(len, value).expect("insert at len is always in range");
    }

    /// Remove and return the element at `index`, shifting every later
    /// element down by one. Releases trailing blocks that became surplus.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::IndexOutOfRange`] if `index >= len`; the stack
    /// is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, StackError> {
        self.check_index(index)?;
        let last = self.len - 1;

        // Walk from the last element down to `index`, pulling each element
        // one slot lower. Taking the last slot leaves it empty.
        let mut loc = locate(last);
        let mut carry = self.slot_mut(loc).take();
        for _ in index..last {
            loc = loc.prev().expect("positions above index have a predecessor");
            carry = mem::replace(self.slot_mut(loc), carry);
        }

        self.len = last;
        self.metrics.elements_shifted += (last - index) as u64;
        self.shrink();
        Ok(carry.expect("slots below len are occupied"))
    }

    /// Remove and return the last element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.remove(len - 1).ok(),
        }
    }

    /// Drop every element and release every block.
    pub fn clear(&mut self) {
        self.len = 0;
        self.release_to(0);
    }

    /// Release trailing blocks down to the fewest that still hold `len`
    /// elements, dropping the spare block the shrink rule keeps.
    pub fn shrink_to_fit(&mut self) {
        self.release_to(blocks_for_len(self.len));
    }

    /// Append one empty block, sized one larger than the current last.
    fn grow(&mut self) {
        self.blocks.push(Block::new(self.blocks.len()));
        self.metrics.blocks_allocated += 1;
    }

    /// Drop trailing blocks while two or more of them are surplus.
    fn shrink(&mut self) {
        self.release_to(shrink_target(self.blocks.len(), self.len));
    }

    fn release_to(&mut self, blocks: usize) {
        if blocks < self.blocks.len() {
            self.metrics.blocks_released += (self.blocks.len() - blocks) as u64;
            self.blocks.truncate(blocks);
        }
    }

    fn check_index(&self, index: usize) -> Result<Location, StackError> {
        if index < self.len {
            Ok(locate(index))
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> StackError {
        StackError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    fn element(&self, loc: Location) -> &T {
        self.blocks[loc.block]
            .get(loc.offset)
            .expect("slots below len are occupied")
    }

    fn slot_mut(&mut self, loc: Location) -> &mut Option<T> {
        self.blocks[loc.block].slot_mut(loc.offset)
    }

    pub(crate) fn blocks(&self) -> &[Block<T>] {
        &self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block<T>] {
        &mut self.blocks
    }

    pub(crate) fn into_blocks(self) -> (Vec<Block<T>>, usize) {
        (self.blocks, self.len)
    }

    /// Check every structural invariant, panicking on the first violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.capacity() >= self.len, "capacity below len");
        assert!(
            self.blocks.len() <= blocks_for_len(self.len) + 1,
            "more than one spare block"
        );
        for (b, block) in self.blocks.iter().enumerate() {
            assert_eq!(block.len(), b + 1, "block {b} resized");
            for (offset, slot) in block.slots().iter().enumerate() {
                let index = triangular(b) + offset;
                assert_eq!(
                    slot.is_some(),
                    index < self.len,
                    "slot {index} occupancy disagrees with len {}",
                    self.len
                );
            }
        }
        let occupied: usize = self.blocks.iter().map(Block::occupied).sum();
        assert_eq!(occupied, self.len);
    }
}

impl<T> Default for RootishArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RootishArrayStack<T> {
    /// Clones the elements into a freshly grown stack; metrics start at
    /// the clone's own allocation count.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for RootishArrayStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RootishArrayStack<T> {}

impl<T> Index<usize> for RootishArrayStack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for RootishArrayStack<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
