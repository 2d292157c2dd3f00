//! Validate Gates use case
//!
//! Derives gate verdicts from a research session snapshot and the artifacts
//! on disk. Every problem is reported as a failing [`GateResult`]; nothing
//! here returns an error.

use crate::config::GateParams;
use crate::ports::artifact_store::ArtifactStorePort;
use futures::future::join_all;
use gates_domain::{GateKind, GateResult, GateTemplate, ResearchSession, render_summary};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of probing the research notes of a session
#[derive(Debug, Clone, PartialEq, Eq)]
struct NoteCheck {
    required: usize,
    /// Display paths of missing notes, in subtopic order
    missing: Vec<String>,
}

impl NoteCheck {
    fn found(&self) -> usize {
        self.required - self.missing.len()
    }

    fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Use case for evaluating the research workflow quality gates
pub struct ValidateGatesUseCase<S: ArtifactStorePort> {
    store: Arc<S>,
    params: GateParams,
}

impl<S: ArtifactStorePort> ValidateGatesUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            params: GateParams::default(),
        }
    }

    pub fn with_params(mut self, params: GateParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GateParams {
        &self.params
    }

    /// Research gate: every subtopic has its note.
    pub async fn validate_research_gate(&self, session: &ResearchSession) -> GateResult {
        let notes = self.check_notes(session).await;

        let result = if notes.is_complete() {
            GateResult::pass(
                GateKind::ResearchCompletion,
                GateTemplate::research_complete(notes.required),
            )
        } else {
            GateResult::fail(
                GateKind::ResearchCompletion,
                GateTemplate::research_incomplete(notes.found(), notes.required),
            )
            .with_missing_files(notes.missing)
            .with_remediation(GateTemplate::research_incomplete_remediation())
        };

        info!(gate = %result.gate(), passed = result.passed(), "research gate evaluated");
        result
    }

    /// Synthesis gate: notes complete, delegated agent, report on disk.
    ///
    /// Stops at the first failing check.
    pub async fn validate_synthesis_gate(&self, session: &ResearchSession) -> GateResult {
        let result = self.synthesis_verdict(session).await;
        info!(gate = %result.gate(), passed = result.passed(), "synthesis gate evaluated");
        result
    }

    async fn synthesis_verdict(&self, session: &ResearchSession) -> GateResult {
        let layout = &self.params.layout;

        // Check 1: all research notes exist
        let notes = self.check_notes(session).await;
        if !notes.is_complete() {
            return GateResult::fail(
                GateKind::ResearchCompletion,
                GateTemplate::synthesis_notes_incomplete(notes.found(), notes.required),
            )
            .with_missing_files(notes.missing)
            .with_remediation(GateTemplate::synthesis_notes_incomplete_remediation());
        }

        // Check 2: synthesis was delegated to the required agent
        let agent = session.synthesis_agent();
        if !layout.is_required_agent(agent) {
            warn!(
                agent,
                expected = %layout.required_agent,
                "synthesis performed by the wrong agent"
            );
            return GateResult::fail(
                GateKind::AgentEnforcement,
                GateTemplate::agent_mismatch(agent, &layout.required_agent),
            )
            .with_violation()
            .with_remediation(GateTemplate::agent_violation_remediation(
                agent,
                &layout.required_agent,
            ));
        }

        // Check 3: the report exists
        let output_exists = match session.synthesis_output() {
            Some(output) => self.probe(&self.store.resolve(output)).await,
            None => false,
        };
        if !output_exists {
            let expected = session
                .synthesis_output()
                .map(str::to_string)
                .unwrap_or_else(|| layout.report_path_template());
            return GateResult::fail(GateKind::SynthesisOutput, GateTemplate::output_missing())
                .with_remediation(GateTemplate::output_missing_remediation(&expected));
        }

        GateResult::pass(
            GateKind::SynthesisComplete,
            GateTemplate::synthesis_complete(),
        )
    }

    /// Evaluate the gates of every phase that reports `completed`.
    ///
    /// Research comes before synthesis; an empty list means no gate was reached.
    pub async fn validate_all_gates(&self, session: &ResearchSession) -> Vec<GateResult> {
        let mut results = Vec::new();

        if session.phases.research.status.is_completed() {
            results.push(self.validate_research_gate(session).await);
        }

        if session.phases.synthesis.status.is_completed() {
            results.push(self.validate_synthesis_gate(session).await);
        }

        results
    }

    /// Plain-text summary of [`Self::validate_all_gates`]
    pub async fn gate_summary(&self, session: &ResearchSession) -> String {
        let results = self.validate_all_gates(session).await;
        render_summary(&results)
    }

    /// Probe every note concurrently; report the missing ones in order.
    async fn check_notes(&self, session: &ResearchSession) -> NoteCheck {
        let paths: Vec<PathBuf> = self
            .params
            .layout
            .note_paths(session.subtopics())
            .iter()
            .map(|relative| self.store.resolve(relative))
            .collect();

        let probes = paths.iter().map(|path| self.probe(path));
        let existence = join_all(probes).await;

        let missing = paths
            .iter()
            .zip(existence)
            .filter(|(_, exists)| !exists)
            .map(|(path, _)| self.store.display(path))
            .collect();

        NoteCheck {
            required: paths.len(),
            missing,
        }
    }

    /// Single existence query, bounded by the configured timeout
    async fn probe(&self, path: &Path) -> bool {
        let exists = match self.params.probe_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.store.exists(path)).await {
                Ok(exists) => exists,
                Err(_) => {
                    warn!(
                        "Existence check for {} timed out after {:?}; treating as missing",
                        path.display(),
                        limit
                    );
                    false
                }
            },
            None => self.store.exists(path).await,
        };
        debug!(path = %path.display(), exists, "probed artifact");
        exists
    }
}
