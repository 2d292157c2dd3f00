//! Gate result entities

use serde::{Deserialize, Serialize};

/// Which quality gate produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// Every subtopic has its research note on disk
    ResearchCompletion,
    /// Synthesis was delegated to the required agent
    AgentEnforcement,
    /// The synthesis report exists
    SynthesisOutput,
    /// All synthesis checks passed
    SynthesisComplete,
}

impl GateKind {
    pub fn as_str(&self) -> &str {
        match self {
            GateKind::ResearchCompletion => "research_completion",
            GateKind::AgentEnforcement => "agent_enforcement",
            GateKind::SynthesisOutput => "synthesis_output",
            GateKind::SynthesisComplete => "synthesis_complete",
        }
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of a single gate check (Value Object)
///
/// Built through [`GateResult::pass`] or [`GateResult::fail`]; a failing
/// result always carries a reason. Fields are read-only once built.
///
/// # Example
///
/// ```
/// use gates_domain::{GateKind, GateResult};
///
/// let result = GateResult::fail(GateKind::SynthesisOutput, "Synthesis report file not found")
///     .with_remediation("Expected synthesis report at: files/reports/ai.md");
/// assert!(!result.passed());
/// assert_eq!(result.reason(), Some("Synthesis report file not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateResult {
    passed: bool,
    gate: GateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    missing_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    violation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remediation: Option<String>,
}

impl GateResult {
    /// A passing verdict
    pub fn pass(gate: GateKind, reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            gate,
            reason: Some(reason.into()),
            missing_files: None,
            violation: None,
            remediation: None,
        }
    }

    /// A failing verdict; the reason is mandatory
    pub fn fail(gate: GateKind, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            ..Self::pass(gate, reason)
        }
    }

    pub fn with_missing_files(mut self, files: Vec<String>) -> Self {
        self.missing_files = Some(files);
        self
    }

    /// Flag the result as a workflow violation (not just an incomplete step)
    pub fn with_violation(mut self) -> Self {
        self.violation = Some(true);
        self
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn gate(&self) -> GateKind {
        self.gate
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn missing_files(&self) -> Option<&[String]> {
        self.missing_files.as_deref()
    }

    pub fn is_violation(&self) -> bool {
        self.violation.unwrap_or(false)
    }

    pub fn remediation(&self) -> Option<&str> {
        self.remediation.as_deref()
    }
}
