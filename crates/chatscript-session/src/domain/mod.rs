//! Domain logic for session traversal.

pub mod engine;
pub mod render;
