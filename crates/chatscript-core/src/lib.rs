//! Chatscript Core — shared domain abstractions.
//!
//! This crate defines the types and traits the other bounded contexts
//! depend on: the speaker vocabulary, the error taxonomy, the session
//! state shape, and the collaborator seams (persistence, events, user
//! lookup, clock, randomness). It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod event;
pub mod presentation;
pub mod rng;
pub mod session;
pub mod speaker;
pub mod store;
pub mod user;
