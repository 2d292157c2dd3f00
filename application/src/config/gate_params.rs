//! Gate parameters: how the validation use case probes artifacts.
//!
//! [`GateParams`] carries the artifact layout and the per-probe timeout.
//! These are application-layer concerns, not domain policy.

use gates_domain::ArtifactLayout;
use std::time::Duration;

/// Parameters for [`ValidateGatesUseCase`](crate::use_cases::validate_gates::ValidateGatesUseCase).
#[derive(Debug, Clone, Default)]
pub struct GateParams {
    /// Where notes and reports are expected, and the required synthesis agent.
    pub layout: ArtifactLayout,
    /// Upper bound for a single existence probe. A probe that exceeds it
    /// counts as "does not exist". `None` waits for the store.
    pub probe_timeout: Option<Duration>,
}

impl GateParams {
    // ==================== Builder Methods ====================

    pub fn with_layout(mut self, layout: ArtifactLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Creates params from an optional timeout in milliseconds.
    pub fn with_probe_timeout_ms(mut self, millis: Option<u64>) -> Self {
        self.probe_timeout = millis.map(Duration::from_millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GateParams::default();
        assert_eq!(params.layout.required_agent, "report-writer");
        assert!(params.probe_timeout.is_none());
    }

    #[test]
    fn test_probe_timeout_from_millis() {
        let params = GateParams::default().with_probe_timeout_ms(Some(250));
        assert_eq!(params.probe_timeout, Some(Duration::from_millis(250)));
    }
}
