//! Rootish array stack: a growable, indexable sequence with O(√n) wasted
//! space.
//!
//! A `Vec` that doubles its buffer can leave up to half of it unused. The
//! [`RootishArrayStack`] instead stores elements in blocks of sizes
//! 1, 2, 3, ..., growing and shrinking one whole block at a time, so at
//! most O(√n) slots are ever empty.
//!
//! # Architecture
//!
//! ```text
//! RootishArrayStack<T>
//! ├── Vec<Block<T>>        block b = Box<[Option<T>]> with b + 1 slots
//! ├── len                  slots 0..len occupied, the rest None
//! └── StackMetrics         grow/shrink/shift counters
//!
//! index i ──layout::locate──▶ Location { block, offset }
//! ```
//!
//! # Example
//!
//! ```
//! use rootish::{RootishArrayStack, StackError};
//!
//! let mut stack: RootishArrayStack<i32> = (0..5).collect();
//! stack.insert(2, 99)?;
//! assert_eq!(stack.to_string(), "[0, 1, 99, 2, 3, 4]");
//!
//! assert_eq!(stack.remove(0)?, 0);
//! assert_eq!(stack.len(), 5);
//! assert!(matches!(
//!     stack.get(10),
//!     Err(StackError::IndexOutOfRange { index: 10, len: 5 })
//! ));
//! # Ok::<(), StackError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub mod display;
pub mod error;
pub mod iter;
pub mod layout;
pub mod metrics;
pub mod stack;

// Public re-exports for the primary API surface.
pub use display::MemoryLayout;
pub use error::StackError;
pub use iter::{IntoIter, Iter, IterMut};
pub use layout::Location;
pub use metrics::StackMetrics;
pub use stack::RootishArrayStack;
