//! Session state configuration from TOML (`[state]` section)

use crate::state::DEFAULT_STATE_PATH;
use serde::{Deserialize, Serialize};

/// Raw state configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStateConfig {
    /// Path of the orchestrator's JSON state file
    pub path: String,
}

impl Default for FileStateConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STATE_PATH.to_string(),
        }
    }
}
