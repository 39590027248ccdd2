//! Route modules organized by concern.

pub mod health;
pub mod script;
pub mod session;
