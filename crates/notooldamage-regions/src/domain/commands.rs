//! Commands for the region context.

use notooldamage_core::record::RawEntry;

/// Command to discard the loaded regions and rebuild them from entries.
#[derive(Debug, Clone)]
pub struct ReloadRegions {
    /// Raw entries in configuration order.
    pub entries: Vec<RawEntry>,
}
