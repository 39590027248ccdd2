//! Test event sinks — mock `EventSink` implementations.

use std::sync::Mutex;

use async_trait::async_trait;
use chatscript_core::error::DomainError;
use chatscript_core::event::{ChatCompleted, EventSink};
use uuid::Uuid;

/// An event sink that records every published event.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    completions: Mutex<Vec<ChatCompleted>>,
    progress: Mutex<Vec<Uuid>>,
}

impl RecordingEventSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the completion events published so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn completions(&self) -> Vec<ChatCompleted> {
        self.completions.lock().unwrap().clone()
    }

    /// Returns the learners a progress tick was published for.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn progress_ticks(&self) -> Vec<Uuid> {
        self.progress.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn publish_completion(&self, event: ChatCompleted) -> Result<(), DomainError> {
        self.completions.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_progress(&self, learner_id: Uuid) -> Result<(), DomainError> {
        self.progress.lock().unwrap().push(learner_id);
        Ok(())
    }
}

/// An event sink that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingEventSink;

#[async_trait]
impl EventSink for FailingEventSink {
    async fn publish_completion(&self, _event: ChatCompleted) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("event bus unavailable".into()))
    }

    async fn publish_progress(&self, _learner_id: Uuid) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("event bus unavailable".into()))
    }
}
