//! Next-step hints derived from where a session currently stands

use super::entities::{PhaseStatus, ResearchSession};
use crate::gate::layout::ArtifactLayout;

impl ResearchSession {
    /// What the orchestrator should do next, one instruction per entry.
    ///
    /// Agent and directory names come from `layout`, so the hints agree with
    /// what the gates enforce.
    pub fn next_steps(&self, layout: &ArtifactLayout) -> Vec<String> {
        let phases = &self.phases;
        let agent = &layout.required_agent;

        if phases.delivery.status.is_active_or_done() {
            return lines(&["Deliver final report to user", "Mark session as complete"]);
        }

        if phases.synthesis.status == PhaseStatus::InProgress {
            return vec![
                format!("Wait for {} agent to complete synthesis", agent),
                "Read completed report".to_string(),
                "Deliver to user".to_string(),
            ];
        }

        if phases.synthesis.status == PhaseStatus::Pending && phases.research.status.is_completed()
        {
            return vec![
                format!("⚠️ CRITICAL: Spawn {} agent for synthesis", agent),
                "Agent will read all research notes".to_string(),
                "Agent will create comprehensive report".to_string(),
            ];
        }

        if phases.research.status == PhaseStatus::InProgress {
            let total = phases.research.parallel_instances;
            let remaining = total.saturating_sub(phases.research.outputs.len());
            return vec![
                format!(
                    "Wait for {} remaining researcher agent(s) to complete",
                    remaining
                ),
                format!(
                    "Monitor {}/ for new notes",
                    layout.notes_dir.trim_end_matches('/')
                ),
                format!("Proceed to synthesis when all {} notes are ready", total),
            ];
        }

        lines(&["Continue with workflow from current phase"])
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ResearchSession {
        ResearchSession::new(
            "research_1",
            "topic",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
    }

    #[test]
    fn test_research_in_progress_counts_remaining() {
        let mut s = session();
        s.phases.research.outputs = vec!["a.md".to_string()];
        let steps = s.next_steps(&ArtifactLayout::default());
        assert_eq!(steps[0], "Wait for 2 remaining researcher agent(s) to complete");
        assert!(steps[2].contains("all 3 notes"));
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut s = session();
        s.phases.research.outputs = vec!["x".to_string(); 5];
        assert!(s.next_steps(&ArtifactLayout::default())[0].contains("Wait for 0 remaining"));
    }

    #[test]
    fn test_research_done_synthesis_pending() {
        let s = session().with_research_completed();
        assert!(s.next_steps(&ArtifactLayout::default())[0].contains("Spawn report-writer"));
    }

    #[test]
    fn test_synthesis_running() {
        let mut s = session().with_research_completed();
        s.phases.synthesis.status = PhaseStatus::InProgress;
        assert_eq!(s.next_steps(&ArtifactLayout::default()).len(), 3);
        assert!(s.next_steps(&ArtifactLayout::default())[0].starts_with("Wait for report-writer"));
    }

    #[test]
    fn test_delivery_takes_precedence() {
        let mut s = session().with_research_completed();
        s.phases.synthesis.status = PhaseStatus::InProgress;
        s.phases.delivery.status = PhaseStatus::Completed;
        assert_eq!(s.next_steps(&ArtifactLayout::default())[0], "Deliver final report to user");
    }

    #[test]
    fn test_custom_layout_names_configured_agent_and_dir() {
        let layout = ArtifactLayout {
            notes_dir: "out/notes/".to_string(),
            reports_dir: "out/reports".to_string(),
            required_agent: "synthesizer".to_string(),
        };

        let pending = session().with_research_completed();
        let steps = pending.next_steps(&layout);
        assert_eq!(steps[0], "⚠️ CRITICAL: Spawn synthesizer agent for synthesis");
        assert!(steps.iter().all(|step| !step.contains("report-writer")));

        let mut running = session().with_research_completed();
        running.phases.synthesis.status = PhaseStatus::InProgress;
        assert_eq!(
            running.next_steps(&layout)[0],
            "Wait for synthesizer agent to complete synthesis"
        );

        assert_eq!(session().next_steps(&layout)[1], "Monitor out/notes/ for new notes");
    }

    #[test]
    fn test_default_layout_monitors_notes_dir() {
        assert_eq!(
            session().next_steps(&ArtifactLayout::default())[1],
            "Monitor files/research_notes/ for new notes"
        );
    }

    #[test]
    fn test_fallback() {
        let mut s = session();
        s.phases.research.status = PhaseStatus::Failed;
        assert_eq!(
            s.next_steps(&ArtifactLayout::default()),
            vec!["Continue with workflow from current phase".to_string()]
        );
    }
}
