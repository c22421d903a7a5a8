//! Where the configuration lives.

use std::path::PathBuf;

/// Environment variable overriding the configuration path.
pub const CONFIG_PATH_VAR: &str = "NOTOOLDAMAGE_CONFIG";

/// Path used when `NOTOOLDAMAGE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Settings for locating the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSettings {
    /// Path to the YAML configuration file.
    pub path: PathBuf,
}

impl ConfigSettings {
    /// Creates settings for an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup(CONFIG_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
        Self::new(path)
    }
}
