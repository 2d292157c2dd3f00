//! Check Session use case
//!
//! Loads a session snapshot from a [`SessionSourcePort`], validates its
//! shape, and runs the selected gates over it.

use crate::ports::artifact_store::ArtifactStorePort;
use crate::ports::session_source::{SessionSourceError, SessionSourcePort};
use crate::use_cases::validate_gates::ValidateGatesUseCase;
use chrono::{DateTime, Utc};
use gates_domain::{GateResult, GateTally, ResearchSession};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that prevent gates from being evaluated at all
#[derive(Error, Debug)]
pub enum CheckSessionError {
    #[error("Failed to load research session: {0}")]
    Source(#[from] SessionSourceError),
}

/// Which gates to evaluate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateSelection {
    /// Only the research gate, regardless of phase status
    Research,
    /// Only the synthesis gate, regardless of phase status
    Synthesis,
    /// Gates of every phase that reports `completed`
    #[default]
    All,
}

/// Input for the CheckSession use case
#[derive(Debug, Clone, Default)]
pub struct CheckSessionInput {
    /// Session id; `None` selects the orchestrator's current session
    pub session_id: Option<String>,
    pub selection: GateSelection,
}

impl CheckSessionInput {
    pub fn new(session_id: Option<String>) -> Self {
        Self {
            session_id,
            selection: GateSelection::All,
        }
    }

    pub fn with_selection(mut self, selection: GateSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Gate verdicts for one session at one point in time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateReport {
    pub session_id: String,
    pub topic: String,
    pub checked_at: DateTime<Utc>,
    pub results: Vec<GateResult>,
    pub next_steps: Vec<String>,
}

impl GateReport {
    pub fn tally(&self) -> GateTally {
        GateTally::from_results(&self.results)
    }

    /// True when every evaluated gate passed (vacuously true for none)
    pub fn all_passed(&self) -> bool {
        self.tally().all_passed()
    }
}

/// Use case for checking a stored research session
pub struct CheckSessionUseCase<R: SessionSourcePort, S: ArtifactStorePort> {
    source: Arc<R>,
    gates: ValidateGatesUseCase<S>,
}

impl<R: SessionSourcePort, S: ArtifactStorePort> CheckSessionUseCase<R, S> {
    pub fn new(source: Arc<R>, gates: ValidateGatesUseCase<S>) -> Self {
        Self { source, gates }
    }

    pub async fn execute(&self, input: CheckSessionInput) -> Result<GateReport, CheckSessionError> {
        let session = match &input.session_id {
            Some(id) => self.source.load(id).await?,
            None => self.source.load_current().await?,
        };
        session.validate().map_err(SessionSourceError::from)?;

        info!(
            "Checking gates for session {} ({} subtopics)",
            session.id,
            session.subtopics().len()
        );

        let results = self.evaluate(&session, input.selection).await;

        Ok(GateReport {
            session_id: session.id.clone(),
            topic: session.topic.clone(),
            checked_at: Utc::now(),
            next_steps: session.next_steps(&self.gates.params().layout),
            results,
        })
    }

    async fn evaluate(&self, session: &ResearchSession, selection: GateSelection) -> Vec<GateResult> {
        match selection {
            GateSelection::Research => vec![self.gates.validate_research_gate(session).await],
            GateSelection::Synthesis => vec![self.gates.validate_synthesis_gate(session).await],
            GateSelection::All => self.gates.validate_all_gates(session).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::config::GateParams;
    use gates_domain::{ArtifactLayout, DomainError, GateKind, WorkflowState};
    use std::path::{Path, PathBuf};

    // ==================== Test Mocks ====================

    struct FixedSource {
        state: WorkflowState,
    }

    #[async_trait]
    impl SessionSourcePort for FixedSource {
        async fn load_current(&self) -> Result<ResearchSession, SessionSourceError> {
            Ok(self.state.current_session()?.clone())
        }

        async fn load(&self, id: &str) -> Result<ResearchSession, SessionSourceError> {
            Ok(self.state.session(id)?.clone())
        }
    }

    /// Store where nothing exists
    struct EmptyStore;

    #[async_trait]
    impl ArtifactStorePort for EmptyStore {
        fn resolve(&self, relative: &str) -> PathBuf {
            PathBuf::from(relative)
        }

        fn display(&self, path: &Path) -> String {
            format!("./{}", path.display())
        }

        async fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    fn use_case(sessions: Vec<ResearchSession>) -> CheckSessionUseCase<FixedSource, EmptyStore> {
        let current = sessions.last().map(|s| s.id.clone());
        let source = FixedSource {
            state: WorkflowState {
                version: None,
                current_research: current,
                sessions,
            },
        };
        CheckSessionUseCase::new(
            Arc::new(source),
            ValidateGatesUseCase::new(Arc::new(EmptyStore)),
        )
    }

    fn session(id: &str, subtopics: &[&str]) -> ResearchSession {
        ResearchSession::new(id, "topic", subtopics.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_checks_current_session() {
        let uc = use_case(vec![
            session("research_1", &["a"]),
            session("research_2", &["b"]).with_research_completed(),
        ]);

        let report = uc.execute(CheckSessionInput::default()).await.unwrap();

        assert_eq!(report.session_id, "research_2");
        assert_eq!(report.results.len(), 1);
        assert!(!report.all_passed());
        assert!(report.next_steps[0].contains("Spawn report-writer"));
    }

    #[tokio::test]
    async fn test_next_steps_follow_configured_agent() {
        let sessions = vec![session("research_1", &["a"]).with_research_completed()];
        let source = FixedSource {
            state: WorkflowState {
                version: None,
                current_research: Some("research_1".to_string()),
                sessions,
            },
        };
        let params = GateParams::default().with_layout(ArtifactLayout {
            required_agent: "synthesizer".to_string(),
            ..Default::default()
        });
        let uc = CheckSessionUseCase::new(
            Arc::new(source),
            ValidateGatesUseCase::new(Arc::new(EmptyStore)).with_params(params),
        );

        let report = uc.execute(CheckSessionInput::default()).await.unwrap();

        assert_eq!(
            report.next_steps[0],
            "⚠️ CRITICAL: Spawn synthesizer agent for synthesis"
        );
    }

    #[tokio::test]
    async fn test_checks_session_by_id() {
        let uc = use_case(vec![session("research_1", &[]), session("research_2", &["b"])]);

        let report = uc
            .execute(
                CheckSessionInput::new(Some("research_1".to_string()))
                    .with_selection(GateSelection::Research),
            )
            .await
            .unwrap();

        assert_eq!(report.session_id, "research_1");
        assert_eq!(report.results[0].gate(), GateKind::ResearchCompletion);
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn test_forced_synthesis_selection_ignores_status() {
        let uc = use_case(vec![session("research_1", &[])]);

        let report = uc
            .execute(CheckSessionInput::default().with_selection(GateSelection::Synthesis))
            .await
            .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].gate(), GateKind::AgentEnforcement);
    }

    #[tokio::test]
    async fn test_unknown_session_is_an_error() {
        let uc = use_case(vec![session("research_1", &["a"])]);

        let err = uc
            .execute(CheckSessionInput::new(Some("nope".to_string())))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Research session not found: nope"));
    }

    #[tokio::test]
    async fn test_invalid_subtopic_fails_fast() {
        let uc = use_case(vec![session("research_1", &["../etc/passwd"]).with_research_completed()]);

        let err = uc.execute(CheckSessionInput::default()).await.unwrap_err();

        assert!(matches!(
            err,
            CheckSessionError::Source(SessionSourceError::Invalid(DomainError::InvalidSession(_)))
        ));
    }

    #[tokio::test]
    async fn test_report_serializes_camel_case() {
        let uc = use_case(vec![session("research_1", &[]).with_research_completed()]);
        let report = uc.execute(CheckSessionInput::default()).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sessionId"], "research_1");
        assert!(json["checkedAt"].is_string());
        assert_eq!(json["results"][0]["gate"], "research_completion");
    }
}
