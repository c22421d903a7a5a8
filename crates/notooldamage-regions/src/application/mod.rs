//! Application layer for the region context.

pub mod command_handlers;
pub mod query_handlers;
