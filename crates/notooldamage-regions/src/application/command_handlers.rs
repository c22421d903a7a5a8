//! Command handlers for the region context.
//!
//! A reload builds the whole replacement set first, then swaps it into the
//! store in one step.

use notooldamage_core::clock::Clock;
use notooldamage_core::diagnostic::Diagnostic;
use notooldamage_core::world::WorldDirectory;
use serde::Serialize;

use crate::domain::commands::ReloadRegions;
use crate::domain::region_set::RegionSet;
use crate::domain::store::RegionStore;

/// Outcome of a reload.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadReport {
    /// Generation number of the newly installed set.
    pub generation: u64,
    /// Number of regions loaded.
    pub loaded: usize,
    /// `true` if a later reload finished first and this set was discarded.
    pub superseded: bool,
    /// Every diagnostic raised, ending with the summary.
    pub diagnostics: Vec<Diagnostic>,
}

impl ReloadReport {
    /// Returns `true` if any entry was rejected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Handles the `ReloadRegions` command: validates every entry and replaces
/// the store's regions with the valid ones.
///
/// Previously loaded regions are discarded even when no entry is valid.
pub fn handle_reload_regions(
    command: &ReloadRegions,
    clock: &dyn Clock,
    worlds: &dyn WorldDirectory,
    store: &RegionStore,
) -> ReloadReport {
    let generation = store.next_generation();
    let (set, diagnostics) = RegionSet::build(&command.entries, worlds, generation, clock.now());
    let loaded = set.len();
    let superseded = !store.replace(set);

    ReloadReport {
        generation,
        loaded,
        superseded,
        diagnostics,
    }
}
