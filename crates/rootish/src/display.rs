//! Textual rendering: element listings and a block-by-block memory view.

use std::fmt;

use crate::stack::RootishArrayStack;

impl<T: fmt::Debug> fmt::Debug for RootishArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for RootishArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> RootishArrayStack<T> {
    /// A view that renders every block and slot, including empty ones.
    ///
    /// ```
    /// use rootish::RootishArrayStack;
    ///
    /// let stack: RootishArrayStack<u8> = (1..=4).collect();
    /// assert_eq!(
    ///     stack.memory_layout().to_string(),
    ///     "{\n\t[1]\n\t[2, 3]\n\t[4, _, _]\n}"
    /// );
    /// ```
    pub fn memory_layout(&self) -> MemoryLayout<'_, T> {
        MemoryLayout { stack: self }
    }
}

/// Block-level view of a stack's storage, returned by
/// [`RootishArrayStack::memory_layout`].
///
/// One line per block; occupied slots use the element's `Debug` form and
/// empty slots render as `_`.
pub struct MemoryLayout<'a, T> {
    stack: &'a RootishArrayStack<T>,
}

impl<T: fmt::Debug> fmt::Display for MemoryLayout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\n")?;
        for block in self.stack.blocks() {
            f.write_str("\t[")?;
            for (offset, slot) in block.slots().iter().enumerate() {
                if offset > 0 {
                    f.write_str(", ")?;
                }
                match slot {
                    Some(value) => write!(f, "{value:?}")?,
                    None => f.write_str("_")?,
                }
            }
            f.write_str("]\n")?;
        }
        f.write_str("}")
    }
}
