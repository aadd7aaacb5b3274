//! Triangular block layout and the index-to-location mapping.
//!
//! Block `b` holds exactly `b + 1` slots, so the first `m` blocks hold
//! `triangular(m) = m(m+1)/2` slots in total. A logical index `i` lives in
//! the unique block `b` with `triangular(b) <= i < triangular(b + 1)`, at
//! offset `i - triangular(b)`.
//!
//! ```text
//! block 0: [ 0]
//! block 1: [ 1  2]
//! block 2: [ 3  4  5]
//! block 3: [ 6  7  8  9]
//! ```

/// Number of slots in the first `k` blocks: `k(k+1)/2`.
///
/// Saturates at `usize::MAX` instead of overflowing.
#[inline]
pub fn triangular(k: usize) -> usize {
    checked_triangular(k).unwrap_or(usize::MAX)
}

/// `k(k+1)/2`, or `None` if it does not fit in a `usize`.
#[inline]
pub fn checked_triangular(k: usize) -> Option<usize> {
    // Halve whichever factor is even so the product is the only overflow point.
    if k % 2 == 0 {
        (k / 2).checked_mul(k.checked_add(1)?)
    } else {
        k.checked_mul(k / 2 + 1)
    }
}

/// Number of slots in block `block`.
#[inline]
pub fn block_len(block: usize) -> usize {
    block + 1
}

/// The block that owns logical index `index`.
///
/// Starts from the closed form `ceil((-3 + sqrt(9 + 8i)) / 2)` in `f64`
/// and then corrects the estimate against the exact inequality
/// `triangular(b) <= index < triangular(b + 1)`. Rounding is worst at the
/// last slot of each block, where `9 + 8i` is a perfect square and an
/// upward error pushes `ceil` into the next block.
pub fn block_of(index: usize) -> usize {
    let estimate = ((-3.0 + (9.0 + 8.0 * index as f64).sqrt()) / 2.0).ceil();
    // `as` saturates: negative or NaN estimates become 0.
    let mut block = estimate as usize;
    while block > 0 && checked_triangular(block).is_none_or(|start| start > index) {
        block -= 1;
    }
    while checked_triangular(block + 1).is_some_and(|next| next <= index) {
        block += 1;
    }
    block
}

/// Map a logical index to its `(block, offset)` location.
#[inline]
pub fn locate(index: usize) -> Location {
    let block = block_of(index);
    Location {
        block,
        offset: index - triangular(block),
    }
}

/// Minimum number of blocks whose combined capacity holds `len` elements.
pub fn blocks_for_len(len: usize) -> usize {
    match len {
        0 => 0,
        n => block_of(n - 1) + 1,
    }
}

/// Block count left after releasing surplus trailing blocks for `len`
/// elements, starting from `blocks`.
///
/// A trailing block is released while the blocks *two* below the current
/// count (`triangular(m - 2)` slots) could still hold every element. The
/// stack therefore keeps at most one spare block beyond the one
/// containing the last element.
pub fn shrink_target(blocks: usize, len: usize) -> usize {
    let mut m = blocks;
    while m > 0 && m.checked_sub(2).map_or(0, triangular) >= len {
        m -= 1;
    }
    m
}

/// Physical position of a logical index: a block number and an offset
/// within that block. `offset <= block` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Block number (0-based).
    pub block: usize,
    /// Slot within the block, `0..=block`.
    pub offset: usize,
}

impl Location {
    /// The location of logical index 0.
    pub const ORIGIN: Location = Location {
        block: 0,
        offset: 0,
    };

    /// The logical index this location represents.
    #[inline]
    pub fn index(self) -> usize {
        triangular(self.block) + self.offset
    }

    /// Location of the following logical index.
    #[inline]
    pub fn next(self) -> Location {
        if self.offset == self.block {
            Location {
                block: self.block + 1,
                offset: 0,
            }
        } else {
            Location {
                block: self.block,
                offset: self.offset + 1,
            }
        }
    }

    /// Location of the preceding logical index, or `None` at the origin.
    #[inline]
    pub fn prev(self) -> Option<Location> {
        if self.offset > 0 {
            Some(Location {
                block: self.block,
                offset: self.offset - 1,
            })
        } else if self.block > 0 {
            Some(Location {
                block: self.block - 1,
                offset: self.block - 1,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact integer reference: `b = floor((isqrt(8i + 1) - 1) / 2)`.
    fn reference_block(index: usize) -> usize {
        ((8 * index + 1).isqrt() - 1) / 2
    }

    #[test]
    fn triangular_small_values() {
        let expected = [0, 1, 3, 6, 10, 15, 21];
        for (k, &t) in expected.iter().enumerate() {
            assert_eq!(triangular(k), t);
        }
    }

    #[test]
    fn triangular_saturates_instead_of_overflowing() {
        assert_eq!(triangular(usize::MAX), usize::MAX);
        assert_eq!(triangular(usize::MAX - 1), usize::MAX);
        assert_eq!(checked_triangular(usize::MAX), None);
        assert_eq!(checked_triangular(4), Some(10));
    }

    #[test]
    fn first_blocks_map_as_drawn() {
        let expected = [
            (0, 0),
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
            (3, 0),
            (3, 3),
        ];
        let indices = [0, 1, 2, 3, 4, 5, 6, 9];
        for (&i, &(block, offset)) in indices.iter().zip(expected.iter()) {
            assert_eq!(locate(i), Location { block, offset }, "index {i}");
        }
    }

    #[test]
    fn every_index_up_to_10k_round_trips() {
        let mut previous: Option<Location> = None;
        for i in 0..=10_000usize {
            let loc = locate(i);
            assert!(loc.offset <= loc.block, "offset exceeds block at {i}");
            assert!(triangular(loc.block) <= i && i < triangular(loc.block + 1));
            assert_eq!(loc.index(), i);
            assert_eq!(loc.block, reference_block(i));
            if let Some(prev) = previous {
                // Consecutive indices map to consecutive locations: injective.
                assert_eq!(prev.next(), loc);
                assert_eq!(loc.prev(), Some(prev));
            }
            previous = Some(loc);
        }
    }

    #[test]
    fn block_boundaries_are_exact() {
        for b in 0..5_000usize {
            let first = triangular(b);
            let last = first + b;
            assert_eq!(block_of(first), b);
            assert_eq!(block_of(last), b);
            assert_eq!(block_of(last + 1), b + 1);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn large_block_boundaries_are_exact() {
        for b in [1usize << 26, (1 << 30) + 7, 3_037_000_000, 4_000_000_000] {
            let first = triangular(b);
            assert_eq!(block_of(first), b);
            assert_eq!(block_of(first + b), b);
            assert_eq!(block_of(first - 1), b - 1);
        }
    }

    #[test]
    fn block_of_handles_usize_max() {
        let b = block_of(usize::MAX);
        assert!(checked_triangular(b).is_some());
        assert_eq!(checked_triangular(b + 1), None);
    }

    #[test]
    fn origin_has_no_predecessor() {
        assert_eq!(Location::ORIGIN.prev(), None);
        assert_eq!(Location::ORIGIN.next(), Location { block: 1, offset: 0 });
    }

    #[test]
    fn blocks_for_len_is_minimal() {
        assert_eq!(blocks_for_len(0), 0);
        assert_eq!(blocks_for_len(1), 1);
        assert_eq!(blocks_for_len(2), 2);
        assert_eq!(blocks_for_len(3), 2);
        assert_eq!(blocks_for_len(4), 3);
        assert_eq!(blocks_for_len(6), 3);
        assert_eq!(blocks_for_len(7), 4);
        for n in 1..2_000usize {
            let m = blocks_for_len(n);
            assert!(triangular(m) >= n);
            assert!(triangular(m - 1) < n);
        }
    }

    #[test]
    fn shrink_target_keeps_one_spare_block() {
        assert_eq!(shrink_target(0, 0), 0);
        assert_eq!(shrink_target(1, 0), 0);
        assert_eq!(shrink_target(5, 0), 0);
        // One element: two blocks survive (block 1 is the spare).
        assert_eq!(shrink_target(5, 1), 2);
        // Six elements fill blocks 0..=2; block 3 is kept as the spare.
        assert_eq!(shrink_target(10, 6), 4);
        assert_eq!(shrink_target(10, 7), 5);
        // Never adds blocks.
        assert_eq!(shrink_target(2, 100), 2);
    }

    #[test]
    fn shrink_target_never_drops_below_len() {
        for blocks in 0..60usize {
            for len in 0..=triangular(blocks) {
                let m = shrink_target(blocks, len);
                assert!(triangular(m) >= len, "blocks={blocks} len={len}");
                assert!(m <= blocks);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn block_of_matches_integer_reference(index in 0usize..(usize::MAX / 16)) {
                let b = block_of(index);
                prop_assert_eq!(b, reference_block(index));
                prop_assert!(triangular(b) <= index);
                prop_assert!(index < triangular(b + 1));
            }

            #[test]
            fn locate_inverts(index in 0usize..(usize::MAX / 16)) {
                let loc = locate(index);
                prop_assert!(loc.offset <= loc.block);
                prop_assert_eq!(loc.index(), index);
            }

            #[test]
            fn last_slot_of_block_stays_in_block(b in 0usize..(1 << 28)) {
                let last = triangular(b) + b;
                prop_assert_eq!(block_of(last), b);
                prop_assert_eq!(locate(last).next(), locate(last + 1));
            }
        }
    }
}
