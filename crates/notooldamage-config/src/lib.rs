//! NoToolDamage — configuration loading.
//!
//! Reads the YAML configuration file and exposes its `areas` mapping as an
//! ordered list of raw entries. Nothing here validates regions.

pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG, ensure_default_config, load_areas, parse_areas};
pub use settings::ConfigSettings;
