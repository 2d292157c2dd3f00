//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Gate verdicts are never errors; these only cover input that cannot be
/// evaluated at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid research session: {0}")]
    InvalidSession(String),

    #[error("Research session not found: {0}")]
    SessionNotFound(String),

    #[error("No active research session in workflow state")]
    NoCurrentSession,
}

impl DomainError {
    /// Check if this error means the requested session simply isn't there
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::SessionNotFound(_) | DomainError::NoCurrentSession
        )
    }
}
