//! Output format value object

use serde::{Deserialize, Serialize};

/// How a gate report should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console report with colors and next steps (default)
    Summary,
    /// The plain-text gate summary only
    Text,
    /// JSON report
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Summary
    }
}
