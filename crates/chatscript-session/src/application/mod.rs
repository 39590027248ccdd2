//! Application layer: command and query handlers that orchestrate the
//! engine with the store, event sink, and user directory collaborators.

pub mod command_handlers;
pub mod query_handlers;
