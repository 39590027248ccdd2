//! Shared test mocks and utilities for the Chatscript dialogue engine.

mod clock;
mod events;
mod rng;
mod store;

pub use clock::FixedClock;
pub use events::{FailingEventSink, RecordingEventSink};
pub use rng::{MockRng, SequenceRng};
pub use store::{EmptySessionStore, FailingSessionStore, RecordingSessionStore};
