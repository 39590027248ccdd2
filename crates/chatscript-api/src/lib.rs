//! Chatscript HTTP API.
//!
//! Exposes the dialogue engine over axum: chat views, response
//! submission, restart, and author-time script validation.

pub mod adapters;
pub mod error;
pub mod routes;
pub mod state;
