//! Domain layer for the region context.

pub mod commands;
pub mod damage;
pub mod region;
pub mod region_set;
pub mod store;
pub mod validation;
