//! JSON session state source
//!
//! Reads the orchestrator's state file. Two layouts are accepted:
//!
//! - a single research session object (has a `phases` key)
//! - a workflow state document with `currentResearch` and `sessions`

use async_trait::async_trait;
use gates_application::{SessionSourceError, SessionSourcePort};
use gates_domain::{ResearchSession, WorkflowState};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the orchestrator's state file
pub const DEFAULT_STATE_PATH: &str = "logs/state/current.json";

/// Parsed contents of a state file
#[derive(Debug, Clone)]
enum StateDocument {
    Session(Box<ResearchSession>),
    Workflow(WorkflowState),
}

/// Session source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonSessionSource {
    path: PathBuf,
}

impl JsonSessionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<StateDocument, SessionSourceError> {
        let path = self.path.display().to_string();
        debug!("Reading session state from {}", path);

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SessionSourceError::Unreadable {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        Self::parse(&path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<StateDocument, SessionSourceError> {
        let malformed = |message: String| SessionSourceError::Malformed {
            path: path.to_string(),
            message,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;

        let Value::Object(map) = &value else {
            return Err(malformed("expected a JSON object".to_string()));
        };

        if map.contains_key("phases") {
            let session: ResearchSession =
                serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
            Ok(StateDocument::Session(Box::new(session)))
        } else if map.contains_key("sessions") || map.contains_key("currentResearch") {
            let state: WorkflowState =
                serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
            Ok(StateDocument::Workflow(state))
        } else {
            Err(malformed(
                "expected a research session (with `phases`) or a workflow state (with `sessions`)"
                    .to_string(),
            ))
        }
    }
}

#[async_trait]
impl SessionSourcePort for JsonSessionSource {
    async fn load_current(&self) -> Result<ResearchSession, SessionSourceError> {
        match self.read_document().await? {
            StateDocument::Session(session) => Ok(*session),
            StateDocument::Workflow(state) => Ok(state.current_session()?.clone()),
        }
    }

    async fn load(&self, id: &str) -> Result<ResearchSession, SessionSourceError> {
        match self.read_document().await? {
            StateDocument::Session(session) if session.id == id => Ok(*session),
            StateDocument::Session(_) => {
                Err(gates_domain::DomainError::SessionNotFound(id.to_string()).into())
            }
            StateDocument::Workflow(state) => Ok(state.session(id)?.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gates_domain::DomainError;
    use std::fs;

    const SESSION: &str = r#"{
        "id": "research_20250101_120000",
        "topic": "AI governance",
        "phases": {
            "decomposition": {"status": "completed", "subtopics": ["ai-safety", "ai-policy"]},
            "research": {"status": "completed"},
            "synthesis": {"status": "pending"}
        }
    }"#;

    fn write_state(content: &str) -> (tempfile::TempDir, JsonSessionSource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current.json");
        fs::write(&path, content).unwrap();
        (dir, JsonSessionSource::new(path))
    }

    #[tokio::test]
    async fn test_load_bare_session() {
        let (_dir, source) = write_state(SESSION);
        let session = source.load_current().await.unwrap();
        assert_eq!(session.subtopics(), &["ai-safety", "ai-policy"]);
    }

    #[tokio::test]
    async fn test_load_bare_session_by_id() {
        let (_dir, source) = write_state(SESSION);
        assert!(source.load("research_20250101_120000").await.is_ok());
        let err = source.load("other").await.unwrap_err();
        assert!(matches!(
            err,
            SessionSourceError::Invalid(DomainError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_workflow_state() {
        let doc = format!(
            r#"{{"version": "1.0", "currentResearch": "research_20250101_120000", "sessions": [{}]}}"#,
            SESSION
        );
        let (_dir, source) = write_state(&doc);
        let session = source.load_current().await.unwrap();
        assert_eq!(session.topic, "AI governance");
    }

    #[tokio::test]
    async fn test_workflow_without_current() {
        let (_dir, source) =
            write_state(r#"{"version": "1.0", "currentResearch": null, "sessions": []}"#);
        let err = source.load_current().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "No active research session in workflow state"
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonSessionSource::new("/definitely/not/here.json");
        let err = source.load_current().await.unwrap_err();
        assert!(matches!(err, SessionSourceError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_missing_research_phase_is_malformed() {
        let (_dir, source) =
            write_state(r#"{"phases": {"decomposition": {}, "synthesis": {"status": "pending"}}}"#);
        let err = source.load_current().await.unwrap_err();
        match err {
            SessionSourceError::Malformed { message, .. } => assert!(message.contains("research")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unrecognized_document() {
        let (_dir, source) = write_state(r#"{"id": "x"}"#);
        let err = source.load_current().await.unwrap_err();
        assert!(err.to_string().contains("expected a research session"));
    }

    #[tokio::test]
    async fn test_not_json() {
        let (_dir, source) = write_state("not json");
        assert!(matches!(
            source.load_current().await.unwrap_err(),
            SessionSourceError::Malformed { .. }
        ));
    }
}
