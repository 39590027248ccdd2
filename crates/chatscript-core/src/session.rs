//! Session state — one learner's transcript and position within a graph.

use serde::{Deserialize, Serialize};

/// One entry of a session transcript, in the shape exchanged with the
/// persistence and transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Speaker ID: the reserved user ID, the default bot ID, or a
    /// namespaced custom bot ID.
    pub from: String,
    /// The displayed text.
    pub message: String,
    /// The step the entry was produced at.
    pub step: String,
}

/// One learner's state for one dialogue graph.
///
/// Created empty on first visit, mutated only by the session engine, and
/// reset to empty by an explicit restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Append-only transcript of exchanged messages.
    pub messages: Vec<TranscriptEntry>,
    /// ID of the step the learner is currently positioned at. Unset
    /// before the first visit.
    pub current_step: Option<String>,
}

impl SessionState {
    /// True when the session has never been started or was restarted.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.messages.is_empty() && self.current_step.is_none()
    }
}
