//! Learner identity lookup for message personalization.

use async_trait::async_trait;
use uuid::Uuid;

/// Lookup of learner display names.
///
/// The name-placeholder substitution uses only the first name, so the
/// directory returns the full display name and callers extract from it.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the learner's display name, if known.
    async fn display_name(&self, learner_id: Uuid) -> Option<String>;
}

/// A directory that returns the same display name for every learner.
#[derive(Debug, Clone)]
pub struct StaticDirectory(pub Option<String>);

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn display_name(&self, _learner_id: Uuid) -> Option<String> {
        self.0.clone()
    }
}

/// Extracts the first name from a display name.
#[must_use]
pub fn first_name(display_name: &str) -> &str {
    display_name.split_whitespace().next().unwrap_or_default()
}
