//! Random number generator abstraction for determinism.
//!
//! Alternative-phrasing groups resolve one candidate at random on every
//! visit to a step. In production this wraps a real RNG; tests inject a
//! seeded or scripted implementation.

use rand::Rng;

/// Abstraction over random selection.
pub trait DeterministicRng: Send {
    /// Pick an index uniformly at random in `[0, len)`.
    ///
    /// Callers guarantee `len` is non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl DeterministicRng for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
