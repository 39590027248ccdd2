//! Test stores — mock `SessionStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chatscript_core::error::DomainError;
use chatscript_core::session::SessionState;
use chatscript_core::store::SessionStore;
use uuid::Uuid;

/// A session store that records every `save` call. Returns the
/// configured state from `load` on every call and always succeeds on
/// `save`.
#[derive(Debug)]
pub struct RecordingSessionStore {
    load_result: Mutex<Option<SessionState>>,
    saved: Mutex<Vec<(Uuid, SessionState)>>,
}

impl RecordingSessionStore {
    /// Create a recording store that returns `load_result` from every
    /// `load` call.
    #[must_use]
    pub fn new(load_result: Option<SessionState>) -> Self {
        Self {
            load_result: Mutex::new(load_result),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all states that were saved.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn saved_states(&self) -> Vec<(Uuid, SessionState)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for RecordingSessionStore {
    async fn load(&self, _learner_id: Uuid) -> Result<Option<SessionState>, DomainError> {
        Ok(self.load_result.lock().unwrap().clone())
    }

    async fn save(&self, learner_id: Uuid, state: &SessionState) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push((learner_id, state.clone()));
        Ok(())
    }
}

/// A session store with no persisted state that silently accepts saves.
/// Useful for first-visit scenarios.
#[derive(Debug)]
pub struct EmptySessionStore;

#[async_trait]
impl SessionStore for EmptySessionStore {
    async fn load(&self, _learner_id: Uuid) -> Result<Option<SessionState>, DomainError> {
        Ok(None)
    }

    async fn save(&self, _learner_id: Uuid, _state: &SessionState) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A session store that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn load(&self, _learner_id: Uuid) -> Result<Option<SessionState>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _learner_id: Uuid, _state: &SessionState) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
