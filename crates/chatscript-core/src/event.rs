//! Completion and progress event publication.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Payload published when a learner's transition reaches a terminal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompleted {
    /// The learner whose chat completed.
    pub learner_id: Uuid,
    /// The terminal step ID. Absent when the chosen response carried no
    /// next step at all.
    pub final_step: Option<String>,
    /// Timestamp of the terminal transition.
    pub occurred_at: DateTime<Utc>,
}

/// Sink for the events the engine publishes toward the host platform.
///
/// Exactly one completion event is published per terminal transition,
/// never on start or restart. A progress tick accompanies each
/// completion.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish a completion event.
    async fn publish_completion(&self, event: ChatCompleted) -> Result<(), DomainError>;

    /// Publish an empty progress tick for the learner.
    async fn publish_progress(&self, learner_id: Uuid) -> Result<(), DomainError>;
}
