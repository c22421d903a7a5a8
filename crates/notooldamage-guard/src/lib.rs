//! NoToolDamage — host integration.
//!
//! `DamageGuard` is what a game server embeds: it loads regions from the
//! configuration file, logs what it found, and answers item damage events.

pub mod guard;
pub mod telemetry;

pub use guard::DamageGuard;
