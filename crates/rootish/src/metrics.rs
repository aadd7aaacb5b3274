//! Allocation and shift counters for a stack.
//!
//! [`StackMetrics`] accumulates over the lifetime of a stack and is read
//! with [`RootishArrayStack::metrics`](crate::RootishArrayStack::metrics).

/// Cumulative counters describing the storage work a stack has done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackMetrics {
    /// Number of blocks allocated (one per grow event).
    pub blocks_allocated: u64,
    /// Number of blocks released by shrinking, `clear` or `shrink_to_fit`.
    pub blocks_released: u64,
    /// Number of element moves performed by insert and remove shifts.
    pub elements_shifted: u64,
}

impl StackMetrics {
    /// Blocks currently held, as implied by the counters.
    pub fn live_blocks(&self) -> u64 {
        self.blocks_allocated - self.blocks_released
    }
}
