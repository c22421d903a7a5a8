//! An immutable, ordered set of regions built by one reload.

use chrono::{DateTime, Utc};
use notooldamage_core::diagnostic::Diagnostic;
use notooldamage_core::record::RawEntry;
use notooldamage_core::world::WorldDirectory;
use serde_json::Value;

use super::region::{BlockCoords, Region};
use super::validation::validate_record;

/// The regions produced by a single reload, in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSet {
    regions: Vec<Region>,
    generation: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl RegionSet {
    /// The set in place before the first reload.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            generation: 0,
            loaded_at: None,
        }
    }

    /// Builds a set from raw entries, validating each in order.
    ///
    /// Entries that are not records, or that fail validation, are skipped.
    /// Returns every diagnostic raised, followed by a summary.
    #[must_use]
    pub fn build(
        entries: &[RawEntry],
        worlds: &dyn WorldDirectory,
        generation: u64,
        loaded_at: DateTime<Utc>,
    ) -> (Self, Vec<Diagnostic>) {
        let mut regions = Vec::new();
        let mut diagnostics = Vec::new();

        for entry in entries {
            let Value::Object(record) = &entry.value else {
                diagnostics.push(Diagnostic::error(format!(
                    "Area '{}' must be a configuration section.",
                    entry.key
                )));
                continue;
            };
            match validate_record(&entry.key, record, worlds) {
                Ok(validated) => {
                    diagnostics.extend(validated.advisories);
                    regions.push(validated.region);
                }
                Err(rejected) => diagnostics.extend(rejected),
            }
        }

        let listing: Vec<String> = regions.iter().map(ToString::to_string).collect();
        diagnostics.push(Diagnostic::info(format!(
            "Loaded {} areas: [{}]",
            regions.len(),
            listing.join(", ")
        )));

        let set = Self {
            regions,
            generation,
            loaded_at: Some(loaded_at),
        };
        (set, diagnostics)
    }

    /// Returns the first region, in load order, containing the position.
    #[must_use]
    pub fn find(&self, world: &str, coords: BlockCoords) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(world, coords))
    }

    /// The regions in load order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the set holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Reload counter; `0` until the first reload.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// When the set was built, if it came from a reload.
    #[must_use]
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::empty()
    }
}
