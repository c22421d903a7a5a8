//! Shared helpers for guard integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use notooldamage_config::ConfigSettings;
use notooldamage_guard::DamageGuard;
use notooldamage_regions::domain::damage::ItemDamage;
use notooldamage_regions::domain::region::BlockPosition;
use notooldamage_test_support::{FixedClock, StaticWorldDirectory};
use tempfile::TempDir;

/// Path of the configuration file inside a test directory.
pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.yml")
}

/// Overwrite the test directory's configuration file.
pub fn write_config(dir: &TempDir, text: &str) {
    fs::write(config_path(dir), text).unwrap();
}

/// Build a guard reading `config_path` with a fixed clock and the worlds
/// `overworld` and `nether` loaded.
pub fn build_guard(config_path: PathBuf) -> DamageGuard {
    DamageGuard::new(
        ConfigSettings::new(config_path),
        Arc::new(FixedClock(
            chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
        )),
        Arc::new(StaticWorldDirectory::new(["overworld", "nether"])),
    )
}

/// An item damage event for a player at an exact location.
pub fn damage_at(world: &str, x: f64, y: f64, z: f64) -> ItemDamage {
    ItemDamage {
        player: "Steve".to_owned(),
        position: BlockPosition::from_location(world, x, y, z),
    }
}
