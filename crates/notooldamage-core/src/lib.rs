//! NoToolDamage Core — shared domain abstractions.
//!
//! This crate defines the boundary types every other crate speaks: raw
//! configuration entries, validation diagnostics, and the clock and world
//! lookup seams. It contains no infrastructure code.

pub mod clock;
pub mod diagnostic;
pub mod error;
pub mod record;
pub mod world;
