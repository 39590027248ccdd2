//! Production adapters for the engine's collaborator traits.
//!
//! The server defaults to in-process implementations; a host platform
//! embedding the engine supplies its own store, directory, and sink.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use chatscript_core::error::DomainError;
use chatscript_core::event::{ChatCompleted, EventSink};
use chatscript_core::session::SessionState;
use chatscript_core::store::SessionStore;

/// A process-local session store. State does not survive a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<Uuid, SessionState>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, SessionState>>, DomainError> {
        self.sessions
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("session store mutex poisoned: {e}")))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, learner_id: Uuid) -> Result<Option<SessionState>, DomainError> {
        Ok(self.lock()?.get(&learner_id).cloned())
    }

    async fn save(&self, learner_id: Uuid, state: &SessionState) -> Result<(), DomainError> {
        self.lock()?.insert(learner_id, state.clone());
        Ok(())
    }
}

/// An event sink that emits completion and progress through tracing.
/// Stands in until the host platform's event bus is wired up.
#[derive(Debug, Default)]
pub struct LoggingEventSink;

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn publish_completion(&self, event: ChatCompleted) -> Result<(), DomainError> {
        tracing::info!(
            learner_id = %event.learner_id,
            final_step = event.final_step.as_deref().unwrap_or("<none>"),
            occurred_at = %event.occurred_at,
            "completion event"
        );
        Ok(())
    }

    async fn publish_progress(&self, learner_id: Uuid) -> Result<(), DomainError> {
        tracing::info!(learner_id = %learner_id, "progress event");
        Ok(())
    }
}
