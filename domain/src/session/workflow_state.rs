//! Workflow state document
//!
//! The orchestrator keeps every session it has run plus a pointer to the
//! one currently active.

use super::entities::ResearchSession;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Orchestrator workflow state (Entity)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Id of the active session, if any
    #[serde(default)]
    pub current_research: Option<String>,
    #[serde(default)]
    pub sessions: Vec<ResearchSession>,
}

impl WorkflowState {
    /// The session `currentResearch` points at
    pub fn current_session(&self) -> Result<&ResearchSession, DomainError> {
        let id = self
            .current_research
            .as_deref()
            .ok_or(DomainError::NoCurrentSession)?;
        self.session(id)
    }

    /// Look up a session by id
    pub fn session(&self, id: &str) -> Result<&ResearchSession, DomainError> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::SessionNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> WorkflowState {
        WorkflowState {
            version: Some("1.0".to_string()),
            current_research: Some("research_2".to_string()),
            sessions: vec![
                ResearchSession::new("research_1", "first", vec!["a".to_string()]),
                ResearchSession::new("research_2", "second", vec!["b".to_string()]),
            ],
        }
    }

    #[test]
    fn test_current_session() {
        let state = state();
        assert_eq!(state.current_session().unwrap().topic, "second");
    }

    #[test]
    fn test_session_by_id() {
        let state = state();
        assert_eq!(state.session("research_1").unwrap().topic, "first");
        assert_eq!(
            state.session("missing").unwrap_err(),
            DomainError::SessionNotFound("missing".to_string())
        );
    }

    #[test]
    fn test_no_current_session() {
        let mut state = state();
        state.current_research = None;
        assert_eq!(
            state.current_session().unwrap_err(),
            DomainError::NoCurrentSession
        );
    }

    #[test]
    fn test_dangling_current_pointer() {
        let mut state = state();
        state.current_research = Some("research_9".to_string());
        assert!(state.current_session().unwrap_err().is_not_found());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"version": "1.0", "currentResearch": null, "sessions": []}"#;
        let state: WorkflowState = serde_json::from_str(json).unwrap();
        assert!(state.current_research.is_none());
        assert!(state.sessions.is_empty());
    }
}
