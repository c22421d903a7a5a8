//! Shared test doubles and fixtures for the NoToolDamage region guard.

mod clock;
mod fixtures;
mod worlds;

pub use clock::FixedClock;
pub use fixtures::{area_entry, area_record};
pub use worlds::{AnyWorldDirectory, StaticWorldDirectory};
