//! Iterators over a [`RootishArrayStack`] and the collection traits built
//! on them.

use std::iter::FusedIterator;

use crate::block::Block;
use crate::layout::{locate, Location};
use crate::stack::RootishArrayStack;

impl<T> RootishArrayStack<T> {
    /// Iterate over the elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            blocks: self.blocks(),
            front: Location::ORIGIN,
            back: locate(self.len()),
            remaining: self.len(),
        }
    }

    /// Iterate mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let remaining = self.len();
        IterMut {
            blocks: self.blocks_mut().iter_mut(),
            current: Default::default(),
            remaining,
        }
    }
}

/// Borrowing iterator returned by [`RootishArrayStack::iter`].
///
/// Steps between neighbouring slots with [`Location::next`] and
/// [`Location::prev`]; only `iter()` itself maps an index to a location.
pub struct Iter<'a, T> {
    blocks: &'a [Block<T>],
    /// Next slot to yield from the front.
    front: Location,
    /// One past the next slot to yield from the back.
    back: Location,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.blocks[self.front.block].get(self.front.offset);
        self.front = self.front.next();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.back.prev()?;
        self.remaining -= 1;
        self.blocks[self.back.block].get(self.back.offset)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator returned by [`RootishArrayStack::iter_mut`].
///
/// Walks the blocks in order and stops after `len` slots, so the empty
/// tail of the last blocks is never visited.
pub struct IterMut<'a, T> {
    blocks: std::slice::IterMut<'a, Block<T>>,
    current: std::slice::IterMut<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        while self.remaining > 0 {
            match self.current.next() {
                Some(slot) => {
                    self.remaining -= 1;
                    return slot.as_mut();
                }
                None => self.current = self.blocks.next()?.slots_mut().iter_mut(),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator produced by `RootishArrayStack`'s `IntoIterator` impl.
///
/// Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    blocks: std::vec::IntoIter<Block<T>>,
    current: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.remaining > 0 {
            match self.current.next() {
                Some(slot) => {
                    self.remaining -= 1;
                    return slot;
                }
                None => self.current = self.blocks.next()?.into_slots(),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RootishArrayStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (blocks, len) = self.into_blocks();
        IntoIter {
            blocks: blocks.into_iter(),
            current: Vec::new().into_iter(),
            remaining: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a RootishArrayStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RootishArrayStack<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for RootishArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = RootishArrayStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for RootishArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for RootishArrayStack<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
