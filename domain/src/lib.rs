//! Domain layer for research-gates
//!
//! This crate contains the research session snapshot, gate verdicts, and
//! the texts used to explain them. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Research Session
//!
//! An orchestrator splits a topic into subtopics, spawns one researcher per
//! subtopic (each writes a note), then delegates synthesis of all notes to
//! the `report-writer` agent.
//!
//! ## Quality Gates
//!
//! - **research_completion**: every note exists
//! - **agent_enforcement**: synthesis was delegated, not done by the orchestrator
//! - **synthesis_output**: the report exists
//! - **synthesis_complete**: all of the above

pub mod config;
pub mod core;
pub mod gate;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use gate::{
    entities::{GateKind, GateResult},
    layout::{ArtifactLayout, DEFAULT_NOTES_DIR, DEFAULT_REPORTS_DIR, REQUIRED_SYNTHESIS_AGENT},
    summary::{GateTally, render_summary},
    template::GateTemplate,
};
pub use session::{
    entities::{
        DecompositionPhase, DeliveryPhase, PhaseStatus, Phases, ResearchPhase, ResearchSession,
        SynthesisPhase,
    },
    workflow_state::WorkflowState,
};
