//! The process-wide, replaceable region set.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::region_set::RegionSet;

/// Holds the current `RegionSet` behind a copy-on-write reference.
///
/// Readers take a cheap `Arc` clone and never observe a partially built set.
/// A reload builds its replacement completely before swapping it in.
#[derive(Debug)]
pub struct RegionStore {
    current: RwLock<Arc<RegionSet>>,
    generations: AtomicU64,
}

impl RegionStore {
    /// Creates a store holding the empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(RegionSet::empty())),
            generations: AtomicU64::new(0),
        }
    }

    /// Returns the current set.
    #[must_use]
    pub(crate) fn snapshot(&self) -> Arc<RegionSet> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Reserves the generation number for the next reload.
    pub(crate) fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Swaps in a new set unless a later generation is already installed.
    ///
    /// Returns `false` if `set` was discarded as stale.
    pub(crate) fn replace(&self, set: RegionSet) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.generation() > set.generation() {
            return false;
        }
        *current = Arc::new(set);
        true
    }
}

impl Default for RegionStore {
    fn default() -> Self {
        Self::new()
    }
}
