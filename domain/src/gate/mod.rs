//! Quality gate domain
//!
//! Gates are checkpoints of the research workflow:
//!
//! ```text
//! decomposition ──▶ research ──[research_completion]──▶ synthesis
//!                                                        │
//!                     [research_completion] ◀────────────┤ notes still missing
//!                     [agent_enforcement]   ◀────────────┤ not delegated
//!                     [synthesis_output]    ◀────────────┤ no report on disk
//!                     [synthesis_complete]  ◀────────────┘ all good
//! ```
//!
//! - [`entities::GateResult`] - one verdict
//! - [`layout::ArtifactLayout`] - where notes and reports are expected
//! - [`template::GateTemplate`] - reason and remediation texts
//! - [`summary::render_summary`] - plain-text summary of several verdicts

pub mod entities;
pub mod layout;
pub mod summary;
pub mod template;
