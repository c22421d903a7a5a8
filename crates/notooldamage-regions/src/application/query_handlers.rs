//! Query handlers for the region context.
//!
//! Queries read the store's current set and never mutate it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::damage::{DamageDecision, ItemDamage};
use crate::domain::region::{BlockCoords, Region};
use crate::domain::store::RegionStore;

/// Read-only view of the store.
#[derive(Debug, Clone, Serialize)]
pub struct RegionStoreView {
    /// Generation of the current set; `0` before the first reload.
    pub generation: u64,
    /// When the current set was loaded.
    pub loaded_at: Option<DateTime<Utc>>,
    /// Regions in match order.
    pub regions: Vec<Region>,
}

/// Returns the first region, in load order, whose world is `world` and
/// whose bounds contain `(x, y, z)`.
#[must_use]
pub fn find_matching_region(
    store: &RegionStore,
    world: &str,
    x: i32,
    y: i32,
    z: i32,
) -> Option<Region> {
    store
        .snapshot()
        .find(world, BlockCoords::new(x, y, z))
        .cloned()
}

/// Decides whether an item damage event should be cancelled.
#[must_use]
pub fn handle_item_damage(store: &RegionStore, event: &ItemDamage) -> DamageDecision {
    let BlockCoords { x, y, z } = event.position.coords;
    match find_matching_region(store, &event.position.world, x, y, z) {
        Some(region) => DamageDecision::Cancel {
            region: region.name().to_owned(),
        },
        None => DamageDecision::Allow,
    }
}

/// Returns a view of the currently loaded regions.
#[must_use]
pub fn get_store_status(store: &RegionStore) -> RegionStoreView {
    let set = store.snapshot();
    RegionStoreView {
        generation: set.generation(),
        loaded_at: set.loaded_at(),
        regions: set.regions().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use notooldamage_test_support::{AnyWorldDirectory, FixedClock, area_entry};

    use super::{find_matching_region, get_store_status, handle_item_damage};
    use crate::application::command_handlers::handle_reload_regions;
    use crate::domain::commands::ReloadRegions;
    use crate::domain::damage::{DamageDecision, ItemDamage};
    use crate::domain::region::BlockPosition;
    use crate::domain::store::RegionStore;

    fn loaded_store() -> RegionStore {
        let store = RegionStore::new();
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let command = ReloadRegions {
            entries: vec![area_entry("spawn", "overworld", [0, 0, 0, 10, 10, 10])],
        };
        handle_reload_regions(&command, &clock, &AnyWorldDirectory, &store);
        store
    }

    #[test]
    fn test_point_inside_region_matches() {
        let store = loaded_store();

        let region = find_matching_region(&store, "overworld", 5, 5, 5).unwrap();

        assert_eq!(region.name(), "spawn");
    }

    #[test]
    fn test_point_past_upper_bound_does_not_match() {
        let store = loaded_store();

        assert!(find_matching_region(&store, "overworld", 11, 5, 5).is_none());
    }

    #[test]
    fn test_same_point_in_another_world_does_not_match() {
        let store = loaded_store();

        assert!(find_matching_region(&store, "nether", 5, 5, 5).is_none());
    }

    #[test]
    fn test_empty_store_matches_nothing() {
        let store = RegionStore::new();

        assert!(find_matching_region(&store, "overworld", 0, 0, 0).is_none());
        assert_eq!(get_store_status(&store).generation, 0);
    }

    #[test]
    fn test_item_damage_inside_region_is_cancelled() {
        // Arrange
        let store = loaded_store();
        let event = ItemDamage {
            player: "Steve".to_owned(),
            position: BlockPosition::from_location("overworld", 10.9, 0.0, 0.2),
        };

        // Act
        let decision = handle_item_damage(&store, &event);

        // Assert
        assert!(decision.is_cancelled());
        assert_eq!(
            decision,
            DamageDecision::Cancel {
                region: "spawn".to_owned()
            }
        );
    }

    #[test]
    fn test_item_damage_just_outside_region_is_allowed() {
        let store = loaded_store();
        let event = ItemDamage {
            player: "Alex".to_owned(),
            position: BlockPosition::from_location("overworld", -0.1, 5.0, 5.0),
        };

        assert_eq!(handle_item_damage(&store, &event), DamageDecision::Allow);
    }
}
