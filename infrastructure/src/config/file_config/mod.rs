//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gates;
mod output;
mod state;

pub use gates::FileGatesConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use state::FileStateConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gates.probe_timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("gates.required_agent cannot be empty")]
    EmptyRequiredAgent,

    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Artifact layout and probing
    pub gates: FileGatesConfig,
    /// Session state file
    pub state: FileStateConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        // A timeout of 0 would mark every artifact as missing
        if let Some(0) = self.gates.probe_timeout_ms {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.gates.required_agent.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyRequiredAgent);
        }

        let paths = [
            ("gates.notes_dir", &self.gates.notes_dir),
            ("gates.reports_dir", &self.gates.reports_dir),
            ("state.path", &self.state.path),
        ];
        for (field, value) in paths {
            if value.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyPath(field));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gates]
notes_dir = "notes"
reports_dir = "reports"
required_agent = "synthesizer"
probe_timeout_ms = 2000

[state]
path = ".research/state.json"

[output]
format = "text"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gates.notes_dir, "notes");
        assert_eq!(config.gates.required_agent, "synthesizer");
        assert_eq!(config.gates.probe_timeout_ms, Some(2000));
        assert_eq!(config.state.path, ".research/state.json");
        assert_eq!(config.output.format, Some(FileOutputFormat::Text));
        assert!(!config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.gates.notes_dir, "files/research_notes");
        assert_eq!(config.state.path, "logs/state/current.json");
        assert!(config.output.format.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[gates]
probe_timeout_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), vec![ConfigValidationError::InvalidTimeout]);
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[gates]
required_agent = " "
notes_dir = ""

[state]
path = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyRequiredAgent,
                ConfigValidationError::EmptyPath("gates.notes_dir"),
                ConfigValidationError::EmptyPath("state.path"),
            ]
        );
        assert_eq!(issues[1].to_string(), "gates.notes_dir cannot be empty");
    }
}
