//! Stack-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during stack operations.
///
/// Every fallible operation validates its index before touching storage,
/// so an `Err` always means the stack is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// The supplied index is outside the range the operation accepts:
    /// `[0, len)` for `get`, `set` and `remove`, `[0, len]` for `insert`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of elements in the stack at the time of the call.
        len: usize,
    },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for stack of length {len}")
            }
        }
    }
}

impl Error for StackError {}
