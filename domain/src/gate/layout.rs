//! Artifact naming conventions shared with the research orchestrator

use serde::{Deserialize, Serialize};

/// Directory research notes are written to, relative to the working root
pub const DEFAULT_NOTES_DIR: &str = "files/research_notes";

/// Directory synthesis reports are written to, relative to the working root
pub const DEFAULT_REPORTS_DIR: &str = "files/reports";

/// The only agent allowed to perform synthesis
pub const REQUIRED_SYNTHESIS_AGENT: &str = "report-writer";

/// Where workflow artifacts live and who must write the report
///
/// Collaborators must honor the same layout: one note per subtopic at
/// `{notes_dir}/{subtopic}.md`, reports at
/// `{reports_dir}/{topic}_{timestamp}.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLayout {
    pub notes_dir: String,
    pub reports_dir: String,
    pub required_agent: String,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            reports_dir: DEFAULT_REPORTS_DIR.to_string(),
            required_agent: REQUIRED_SYNTHESIS_AGENT.to_string(),
        }
    }
}

impl ArtifactLayout {
    /// Relative path of the note for `subtopic`
    pub fn note_path(&self, subtopic: &str) -> String {
        format!("{}/{}.md", self.notes_dir.trim_end_matches('/'), subtopic)
    }

    /// Relative note paths for all subtopics, in order
    pub fn note_paths(&self, subtopics: &[String]) -> Vec<String> {
        subtopics.iter().map(|s| self.note_path(s)).collect()
    }

    /// Placeholder report path used when no output was recorded
    pub fn report_path_template(&self) -> String {
        format!(
            "{}/{{topic}}_{{timestamp}}.md",
            self.reports_dir.trim_end_matches('/')
        )
    }

    /// Case-sensitive exact match against the required agent
    pub fn is_required_agent(&self, agent: &str) -> bool {
        agent == self.required_agent
    }
}
