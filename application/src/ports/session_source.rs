//! Session source port.
//!
//! Defines where research session snapshots come from. The orchestrator
//! owns the state; this side only reads it.

use async_trait::async_trait;
use gates_domain::{DomainError, ResearchSession};
use thiserror::Error;

/// Errors that can occur while loading a session snapshot
#[derive(Error, Debug)]
pub enum SessionSourceError {
    #[error("Could not read session state {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Malformed session state {path}: {message}")]
    Malformed { path: String, message: String },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Port for loading research sessions
#[async_trait]
pub trait SessionSourcePort: Send + Sync {
    /// Load the session the orchestrator marks as current
    async fn load_current(&self) -> Result<ResearchSession, SessionSourceError>;

    /// Load a specific session by id
    async fn load(&self, id: &str) -> Result<ResearchSession, SessionSourceError>;
}
