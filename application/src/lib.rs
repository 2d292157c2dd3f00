//! Application layer for research-gates
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GateParams;
pub use ports::{
    artifact_store::ArtifactStorePort,
    session_source::{SessionSourceError, SessionSourcePort},
};
pub use use_cases::check_session::{
    CheckSessionError, CheckSessionInput, CheckSessionUseCase, GateReport, GateSelection,
};
pub use use_cases::validate_gates::ValidateGatesUseCase;
