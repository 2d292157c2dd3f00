//! Reason and remediation texts for gate results
//!
//! Presentation content only; gate logic picks a template and fills in
//! counts, agents and paths.

/// Templates for the human-readable parts of a [`GateResult`](super::GateResult)
pub struct GateTemplate;

impl GateTemplate {
    /// Reason when the research gate finds missing notes
    pub fn research_incomplete(found: usize, required: usize) -> String {
        format!("{}/{} research notes completed", found, required)
    }

    pub fn research_incomplete_remediation() -> &'static str {
        "Wait for all researcher agents to complete their investigations before proceeding to synthesis."
    }

    pub fn research_complete(required: usize) -> String {
        format!("All {} research notes completed successfully", required)
    }

    /// Reason when synthesis is attempted before every note exists
    pub fn synthesis_notes_incomplete(found: usize, required: usize) -> String {
        format!(
            "Not all research notes completed. {}/{} files found.",
            found, required
        )
    }

    pub fn synthesis_notes_incomplete_remediation() -> &'static str {
        "Ensure all researcher agents have completed and saved their findings before attempting synthesis."
    }

    pub fn agent_mismatch(actual: &str, expected: &str) -> String {
        format!(
            "Synthesis performed by \"{}\", expected \"{}\"",
            actual, expected
        )
    }

    /// Multi-line guidance for a synthesis that was not delegated
    pub fn agent_violation_remediation(actual: &str, expected: &str) -> String {
        format!(
            r#"**WORKFLOW VIOLATION DETECTED**

The orchestrator attempted to perform synthesis directly instead of delegating
to the {expected} agent.

**Expected Workflow**:
1. Orchestrator verifies all research notes exist
2. Orchestrator spawns {expected} agent via Task tool
3. {expected} agent reads all notes and synthesizes
4. {expected} agent writes comprehensive report
5. Orchestrator reads final report and delivers to user

**What Happened**:
Agent "{actual}" performed synthesis (should be "{expected}")

**How to Fix**:
Update multi-agent-researcher skill to exclude Write from allowed-tools.
This creates architectural constraint forcing delegation to {expected} agent.

**Current Status**:
If skill v2.0.0+ is active, this should not happen (architectural enforcement).
This violation indicates either:
- Skill was bypassed
- allowed-tools constraint was modified
- Agent detection logic needs improvement"#
        )
    }

    pub fn output_missing() -> &'static str {
        "Synthesis report file not found"
    }

    pub fn output_missing_remediation(expected_path: &str) -> String {
        format!("Expected synthesis report at: {}", expected_path)
    }

    pub fn synthesis_complete() -> &'static str {
        "All synthesis quality gates passed"
    }

    pub fn no_gates_reached() -> &'static str {
        "No quality gates have been reached yet."
    }
}
