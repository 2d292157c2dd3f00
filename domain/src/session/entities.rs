//! Research session entities
//!
//! A [`ResearchSession`] is the snapshot an orchestrator keeps for one
//! research run. It is produced outside this crate and only read here, so
//! the shapes mirror the orchestrator's JSON record (camelCase keys).

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Status of a workflow phase (or of the session as a whole)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PhaseStatus::Pending => "pending",
            PhaseStatus::InProgress => "in_progress",
            PhaseStatus::Completed => "completed",
            PhaseStatus::Failed => "failed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PhaseStatus::Completed)
    }

    /// Whether work in this phase has started (running or finished)
    pub fn is_active_or_done(&self) -> bool {
        matches!(self, PhaseStatus::InProgress | PhaseStatus::Completed)
    }
}

impl std::fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decomposition phase: the topic split into subtopics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionPhase {
    #[serde(default)]
    pub status: PhaseStatus,
    /// Ordered subtopic identifiers. Absent is treated as empty.
    #[serde(default)]
    pub subtopics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Research phase: parallel researchers writing one note per subtopic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPhase {
    pub status: PhaseStatus,
    #[serde(default)]
    pub parallel_instances: usize,
    /// Note paths the orchestrator has seen written so far
    #[serde(default)]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Synthesis phase: one agent turns the notes into a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisPhase {
    pub status: PhaseStatus,
    /// Agent that performed synthesis, as detected by the orchestrator
    #[serde(default = "unknown_agent")]
    pub agent: String,
    /// Path of the produced report, if one was recorded
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

fn unknown_agent() -> String {
    "unknown".to_string()
}

/// Delivery phase: the orchestrator hands the report to the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPhase {
    #[serde(default)]
    pub status: PhaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// All phases of a research session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phases {
    pub decomposition: DecompositionPhase,
    pub research: ResearchPhase,
    pub synthesis: SynthesisPhase,
    #[serde(default)]
    pub delivery: DeliveryPhase,
}

/// A research session snapshot (Entity)
///
/// `phases` and the research/synthesis records are mandatory: a document
/// without them fails to deserialize instead of being treated as "nothing
/// to check".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub status: PhaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub phases: Phases,
}

impl ResearchSession {
    /// Create a fresh session: decomposition done, researchers running.
    pub fn new(id: impl Into<String>, topic: impl Into<String>, subtopics: Vec<String>) -> Self {
        let parallel_instances = subtopics.len();
        Self {
            id: id.into(),
            topic: topic.into(),
            status: PhaseStatus::InProgress,
            started_at: None,
            completed_at: None,
            phases: Phases {
                decomposition: DecompositionPhase {
                    status: PhaseStatus::Completed,
                    subtopics: Some(subtopics),
                    completed_at: None,
                },
                research: ResearchPhase {
                    status: PhaseStatus::InProgress,
                    parallel_instances,
                    outputs: Vec::new(),
                    started_at: None,
                    completed_at: None,
                },
                synthesis: SynthesisPhase {
                    status: PhaseStatus::Pending,
                    agent: unknown_agent(),
                    output: None,
                    started_at: None,
                    completed_at: None,
                },
                delivery: DeliveryPhase::default(),
            },
        }
    }

    /// Mark the research phase as completed
    pub fn with_research_completed(mut self) -> Self {
        self.phases.research.status = PhaseStatus::Completed;
        self
    }

    /// Record a completed synthesis by `agent`, optionally with a report path
    pub fn with_synthesis(mut self, agent: impl Into<String>, output: Option<String>) -> Self {
        self.phases.synthesis.status = PhaseStatus::Completed;
        self.phases.synthesis.agent = agent.into();
        self.phases.synthesis.output = output;
        self
    }

    /// Ordered subtopics (empty when the decomposition recorded none)
    pub fn subtopics(&self) -> &[String] {
        self.phases.decomposition.subtopics.as_deref().unwrap_or(&[])
    }

    pub fn synthesis_agent(&self) -> &str {
        &self.phases.synthesis.agent
    }

    pub fn synthesis_output(&self) -> Option<&str> {
        self.phases.synthesis.output.as_deref()
    }

    /// Reject sessions whose subtopics cannot name a note file.
    ///
    /// Subtopics become file stems under the notes directory. Empty ids and
    /// ids that leave that directory (a `..` component, an absolute path)
    /// are refused; nested ids such as `ai/ml` are kept.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (index, subtopic) in self.subtopics().iter().enumerate() {
            if subtopic.trim().is_empty() {
                return Err(DomainError::InvalidSession(format!(
                    "subtopic #{} is empty",
                    index + 1
                )));
            }
            let escapes = Path::new(subtopic).components().any(|c| {
                matches!(
                    c,
                    Component::ParentDir | Component::RootDir | Component::Prefix(_)
                )
            });
            if escapes {
                return Err(DomainError::InvalidSession(format!(
                    "subtopic '{}' points outside the notes directory",
                    subtopic
                )));
            }
        }
        Ok(())
    }
}
