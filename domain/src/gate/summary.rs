//! Plain-text gate summary

use super::entities::GateResult;
use super::template::GateTemplate;
use serde::{Deserialize, Serialize};

/// Passed/failed counts over a set of gate results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateTally {
    pub passed: usize,
    pub failed: usize,
}

impl GateTally {
    pub fn from_results(results: &[GateResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            passed,
            failed: results.len() - passed,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Render results as the plain-text summary used in logs and hooks.
///
/// ```
/// use gates_domain::{GateKind, GateResult, render_summary};
///
/// let results = vec![GateResult::pass(GateKind::SynthesisComplete, "All synthesis quality gates passed")];
/// let text = render_summary(&results);
/// assert!(text.starts_with("Quality Gates: 1 passed, 0 failed"));
/// ```
pub fn render_summary(results: &[GateResult]) -> String {
    if results.is_empty() {
        return GateTemplate::no_gates_reached().to_string();
    }

    let tally = GateTally::from_results(results);
    let mut summary = format!(
        "Quality Gates: {} passed, {} failed\n\n",
        tally.passed, tally.failed
    );

    for result in results {
        let status = if result.passed() {
            "✅ PASSED"
        } else {
            "❌ FAILED"
        };
        summary.push_str(&format!("{}: {}\n", status, result.gate()));

        if let Some(reason) = result.reason() {
            summary.push_str(&format!("  Reason: {}\n", reason));
        }
        if let Some(files) = result.missing_files()
            && !files.is_empty()
        {
            summary.push_str("  Missing files:\n");
            for file in files {
                summary.push_str(&format!("    - {}\n", file));
            }
        }
        if result.is_violation() {
            summary.push_str("  ⚠️ WORKFLOW VIOLATION DETECTED\n");
        }
        if let Some(remediation) = result.remediation() {
            summary.push_str(&format!("  Remediation: {}\n", remediation));
        }
        summary.push('\n');
    }

    summary.trim().to_string()
}
