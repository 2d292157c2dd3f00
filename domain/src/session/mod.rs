//! Research session domain.
//!
//! - [`entities::ResearchSession`] - snapshot of one research run and its phases
//! - [`workflow_state::WorkflowState`] - all sessions plus the active pointer
//! - `guidance` - next-step hints for a session

pub mod entities;
mod guidance;
pub mod workflow_state;
