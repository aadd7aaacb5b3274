//! Benchmark workloads for the rootish array stack.
//!
//! Provides deterministic inputs shared by the criterion benches and the
//! `memory_overhead` example:
//!
//! - [`filled_stack`]: a stack holding `0..n`
//! - [`scattered_indices`]: reproducible pseudo-random positions
//! - [`OverheadReport`]: wasted-slot comparison against `Vec`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rootish::RootishArrayStack;

/// Build a stack holding `0..n` by repeated `push`.
pub fn filled_stack(n: usize) -> RootishArrayStack<u64> {
    (0..n as u64).collect()
}

/// `count` deterministic pseudo-random indices in `0..bound`.
///
/// Multiplicative hashing of the sequence number; the same `seed` always
/// yields the same positions.
pub fn scattered_indices(count: usize, bound: usize, seed: u64) -> Vec<usize> {
    assert!(bound > 0, "bound must be > 0");
    (0..count as u64)
        .map(|i| {
            let h = (i ^ seed)
                .wrapping_mul(6364136223846793007)
                .wrapping_add(1442695040888963407);
            ((h >> 17) % bound as u64) as usize
        })
        .collect()
}

/// Wasted slots of a stack compared with a `Vec` grown the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverheadReport {
    /// Number of elements stored.
    pub len: usize,
    /// Empty slots held by the stack.
    pub stack_spare: usize,
    /// Blocks held by the stack.
    pub stack_blocks: usize,
    /// Empty slots held by the `Vec`.
    pub vec_spare: usize,
}

impl OverheadReport {
    /// Push `0..n` into both structures and record their spare capacity.
    pub fn measure(n: usize) -> Self {
        let stack = filled_stack(n);
        let mut vec = Vec::new();
        for i in 0..n as u64 {
            vec.push(i);
        }
        Self {
            len: n,
            stack_spare: stack.capacity() - stack.len(),
            stack_blocks: stack.block_count(),
            vec_spare: vec.capacity() - vec.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_stack_holds_sequence() {
        let stack = filled_stack(10);
        assert_eq!(stack.len(), 10);
        assert_eq!(stack[9], 9);
    }

    #[test]
    fn scattered_indices_are_deterministic_and_bounded() {
        let a = scattered_indices(500, 37, 7);
        let b = scattered_indices(500, 37, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 37));
        assert_ne!(a, scattered_indices(500, 37, 8));
    }

    #[test]
    fn stack_spare_is_below_block_count() {
        for n in [1, 10, 1_000, 50_000] {
            let report = OverheadReport::measure(n);
            assert!(report.stack_spare < report.stack_blocks);
        }
    }
}
