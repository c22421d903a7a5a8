//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent the `areas` list from being read at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("could not access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML.
    #[error("Invalid config - {0}")]
    Parse(#[from] serde_yaml::Error),

    /// There is no `areas` key.
    #[error("Invalid config - missing 'areas'")]
    MissingAreas,

    /// `areas` is present but is not a mapping.
    #[error("Invalid config - 'areas' is not a section.")]
    AreasNotSection,
}
