//! Raw, unvalidated configuration input.

use serde_json::Value;

/// One named entry under the configuration's area list.
///
/// `value` is whatever the loader found under `key`. Only JSON objects are
/// candidate regions; anything else is rejected during reload.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// The entry's key, used to name the region in diagnostics.
    pub key: String,
    /// The unparsed value.
    pub value: Value,
}

impl RawEntry {
    /// Creates a new raw entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Field-name to value mapping describing one candidate region.
pub type RawRecord = serde_json::Map<String, Value>;
