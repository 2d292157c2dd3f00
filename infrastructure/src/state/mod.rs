//! Session state adapters
//!
//! - [`JsonSessionSource`] - Loads research sessions from the orchestrator's JSON state file

mod json_source;

pub use json_source::{DEFAULT_STATE_PATH, JsonSessionSource};
