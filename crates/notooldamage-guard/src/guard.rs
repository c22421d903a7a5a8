//! The guard a host server embeds.

use std::sync::Arc;

use notooldamage_config::{ConfigError, ConfigSettings, ensure_default_config, load_areas};
use notooldamage_core::clock::Clock;
use notooldamage_core::diagnostic::{Diagnostic, Severity};
use notooldamage_core::record::RawEntry;
use notooldamage_core::world::WorldDirectory;
use notooldamage_regions::application::command_handlers::{self, ReloadReport};
use notooldamage_regions::application::query_handlers::{self, RegionStoreView};
use notooldamage_regions::domain::commands::ReloadRegions;
use notooldamage_regions::domain::damage::{DamageDecision, ItemDamage};
use notooldamage_regions::domain::store::RegionStore;
use tracing::{debug, error, info, instrument, warn};

/// Suppresses item durability loss for players inside configured regions.
pub struct DamageGuard {
    settings: ConfigSettings,
    clock: Arc<dyn Clock>,
    worlds: Arc<dyn WorldDirectory>,
    store: RegionStore,
}

impl DamageGuard {
    /// Creates a guard with no regions loaded. Call [`DamageGuard::reload`]
    /// once the host is ready.
    #[must_use]
    pub fn new(
        settings: ConfigSettings,
        clock: Arc<dyn Clock>,
        worlds: Arc<dyn WorldDirectory>,
    ) -> Self {
        Self {
            settings,
            clock,
            worlds,
            store: RegionStore::new(),
        }
    }

    /// Reloads regions from the configuration file, writing the default
    /// file first if there is none.
    ///
    /// A file that cannot be read or has no usable `areas` mapping leaves
    /// the guard with no regions; the reason is the first diagnostic.
    #[instrument(skip(self), fields(path = %self.settings.path.display()))]
    pub fn reload(&self) -> ReloadReport {
        match self.read_entries() {
            Ok(entries) => self.reload_entries(entries),
            Err(e) => {
                let mut report = self.install(Vec::new());
                report.diagnostics.insert(0, Diagnostic::error(e.to_string()));
                log_report(&report);
                report
            }
        }
    }

    /// Reloads regions from entries supplied by the host.
    pub fn reload_entries(&self, entries: Vec<RawEntry>) -> ReloadReport {
        let report = self.install(entries);
        log_report(&report);
        report
    }

    /// Decides whether an item damage event should be cancelled.
    pub fn on_item_damage(&self, event: &ItemDamage) -> DamageDecision {
        let decision = query_handlers::handle_item_damage(&self.store, event);
        if let DamageDecision::Cancel { region } = &decision {
            debug!(player = %event.player, region = %region, "suppressed item durability loss");
        }
        decision
    }

    /// Returns the currently loaded regions.
    #[must_use]
    pub fn status(&self) -> RegionStoreView {
        query_handlers::get_store_status(&self.store)
    }

    fn read_entries(&self) -> Result<Vec<RawEntry>, ConfigError> {
        if ensure_default_config(&self.settings.path)? {
            info!("wrote default configuration");
        }
        load_areas(&self.settings.path)
    }

    fn install(&self, entries: Vec<RawEntry>) -> ReloadReport {
        let command = ReloadRegions { entries };
        command_handlers::handle_reload_regions(
            &command,
            self.clock.as_ref(),
            self.worlds.as_ref(),
            &self.store,
        )
    }
}

fn log_report(report: &ReloadReport) {
    if report.superseded {
        warn!(
            generation = report.generation,
            "reload finished after a newer one and was discarded"
        );
    }
    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Error => error!(generation = report.generation, "{}", diagnostic.message),
            Severity::Warning => warn!(generation = report.generation, "{}", diagnostic.message),
            Severity::Info => info!(generation = report.generation, "{}", diagnostic.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use notooldamage_config::ConfigSettings;
    use notooldamage_regions::domain::damage::{DamageDecision, ItemDamage};
    use notooldamage_regions::domain::region::BlockPosition;
    use notooldamage_test_support::{FixedClock, StaticWorldDirectory, area_entry};

    use super::DamageGuard;

    fn guard() -> DamageGuard {
        DamageGuard::new(
            ConfigSettings::new("unused.yml"),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())),
            Arc::new(StaticWorldDirectory::new(["overworld"])),
        )
    }

    #[test]
    fn test_reload_entries_then_damage_is_cancelled_inside() {
        // Arrange
        let guard = guard();
        guard.reload_entries(vec![area_entry("spawn", "overworld", [0, 0, 0, 10, 10, 10])]);
        let event = ItemDamage {
            player: "Steve".to_owned(),
            position: BlockPosition::new("overworld", 5, 5, 5),
        };

        // Act
        let decision = guard.on_item_damage(&event);

        // Assert
        assert_eq!(
            decision,
            DamageDecision::Cancel {
                region: "spawn".to_owned()
            }
        );
        assert_eq!(guard.status().regions.len(), 1);
    }

    #[test]
    fn test_unknown_world_warning_does_not_block_loading() {
        let guard = guard();

        let report = guard.reload_entries(vec![area_entry("arena", "pvp", [0, 0, 0, 1, 1, 1])]);

        assert_eq!(report.loaded, 1);
        assert!(!report.has_errors());
        assert_eq!(report.diagnostics.len(), 2);
    }
}
