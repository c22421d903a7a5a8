//! NoToolDamage — region bounded context.
//!
//! Responsible for turning raw configuration records into validated
//! regions, holding the current region set, and answering whether a block
//! position lies inside any region.

pub mod application;
pub mod domain;
