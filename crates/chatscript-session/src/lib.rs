//! Chatscript — session traversal.
//!
//! Drives one learner through a dialogue graph: applies chosen
//! responses, tracks the transcript, detects terminal steps, and
//! publishes completion through the injected collaborators.

pub mod application;
pub mod domain;
