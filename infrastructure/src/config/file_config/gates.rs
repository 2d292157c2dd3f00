//! Gate configuration from TOML (`[gates]` section)

use gates_application::GateParams;
use gates_domain::{ArtifactLayout, DEFAULT_NOTES_DIR, DEFAULT_REPORTS_DIR, REQUIRED_SYNTHESIS_AGENT};
use serde::{Deserialize, Serialize};

/// Raw gate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatesConfig {
    /// Directory holding one research note per subtopic
    pub notes_dir: String,
    /// Directory synthesis reports are written to
    pub reports_dir: String,
    /// Agent that must perform synthesis
    pub required_agent: String,
    /// Per-probe timeout in milliseconds (unset waits for the file system)
    pub probe_timeout_ms: Option<u64>,
}

impl Default for FileGatesConfig {
    fn default() -> Self {
        Self {
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            reports_dir: DEFAULT_REPORTS_DIR.to_string(),
            required_agent: REQUIRED_SYNTHESIS_AGENT.to_string(),
            probe_timeout_ms: None,
        }
    }
}

impl FileGatesConfig {
    /// Convert to the application's gate parameters
    pub fn to_gate_params(&self) -> GateParams {
        GateParams::default()
            .with_layout(ArtifactLayout {
                notes_dir: self.notes_dir.clone(),
                reports_dir: self.reports_dir.clone(),
                required_agent: self.required_agent.clone(),
            })
            .with_probe_timeout_ms(self.probe_timeout_ms)
    }
}
