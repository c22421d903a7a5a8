//! Item damage events and the decision returned to the host.

use serde::Serialize;

use super::region::BlockPosition;

/// A player's held or worn item is about to lose durability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDamage {
    /// Name of the player whose item is being damaged.
    pub player: String,
    /// The block the player is standing in.
    pub position: BlockPosition,
}

/// What the host should do with an item damage event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum DamageDecision {
    /// Suppress the durability loss; the player is inside `region`.
    Cancel {
        /// Name of the matching region.
        region: String,
    },
    /// Let the durability loss happen.
    Allow,
}

impl DamageDecision {
    /// Returns `true` if the event should be cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancel { .. })
    }
}
