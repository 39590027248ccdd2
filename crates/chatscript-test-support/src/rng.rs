//! Test RNGs — deterministic `DeterministicRng` implementations.

use chatscript_core::rng::DeterministicRng;

/// A no-op RNG that always picks index `0`. Suitable for tests that do
/// not depend on which alternative is chosen.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// An RNG that returns indices from a predetermined sequence. Panics if
/// the sequence is exhausted. Used in tests that pin which alternative
/// phrasing a message group resolves to.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given indices.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn pick_index(&mut self, _len: usize) -> usize {
        let value = self.values[self.index];
        self.index += 1;
        value
    }
}
