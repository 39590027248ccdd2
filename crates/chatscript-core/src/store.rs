//! Session persistence contract.
//!
//! The core prescribes only the shape of persisted state, never a storage
//! engine. Retry and backoff policy belong to implementations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::session::SessionState;

/// Repository trait for loading and saving learner session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted state for a learner, or `None` when the learner
    /// has no session yet.
    async fn load(&self, learner_id: Uuid) -> Result<Option<SessionState>, DomainError>;

    /// Persist the learner's state, replacing any previous snapshot.
    async fn save(&self, learner_id: Uuid, state: &SessionState) -> Result<(), DomainError>;
}
