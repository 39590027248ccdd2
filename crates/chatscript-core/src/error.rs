//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The script document is not well-formed structured data, or does not
    /// parse to a top-level sequence. Fatal to graph construction.
    #[error("script parse error: {0}")]
    Parse(String),

    /// A step ID was requested that does not exist in the current graph.
    #[error("step not found: {0}")]
    StepNotFound(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
