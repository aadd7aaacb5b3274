//! Drop-counting values for checking that removed elements are released.
//!
//! - [`DropTracker`] hands out [`Tracked`] values and counts how many of
//!   them have been dropped.
//! - [`Tracked`] carries an id so tests can also check ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Issues [`Tracked`] values and counts their drops.
///
/// Cloning the tracker shares the counters.
#[derive(Clone, Debug, Default)]
pub struct DropTracker {
    created: Arc<AtomicUsize>,
    dropped: Arc<AtomicUsize>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value with the given id.
    pub fn track(&self, id: usize) -> Tracked {
        self.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            id,
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Number of tracked values created so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// A value whose drop is recorded by the [`DropTracker`] that issued it.
///
/// Deliberately not `Clone`: every drop corresponds to exactly one
/// `track` call.
#[derive(Debug)]
pub struct Tracked {
    id: usize,
    dropped: Arc<AtomicUsize>,
}

impl Tracked {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }
}
