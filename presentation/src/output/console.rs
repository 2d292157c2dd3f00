//! Console output formatter for gate reports

use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use gates_application::GateReport;
use gates_domain::{GateResult, GateTemplate, render_summary};

/// Formats gate reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn ANSI colors off for everything formatted afterwards
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format the complete report
    pub fn format(report: &GateReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Quality Gates"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Session:".cyan().bold(),
            report.session_id
        ));
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), report.topic));
        output.push_str(&format!(
            "{} {}\n",
            "Checked:".cyan().bold(),
            report.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&Self::section_header("Gates"));
        if report.results.is_empty() {
            output.push_str(&format!("\n{}\n", GateTemplate::no_gates_reached().dimmed()));
        }
        for result in &report.results {
            output.push_str(&Self::format_result(result));
        }

        let tally = report.tally();
        let counts = format!("{} passed, {} failed", tally.passed, tally.failed);
        output.push_str(&format!(
            "\n{} {}\n",
            "Result:".cyan().bold(),
            if tally.all_passed() {
                counts.green().bold()
            } else {
                counts.red().bold()
            }
        ));

        if !report.next_steps.is_empty() {
            output.push_str(&Self::section_header("Next Steps"));
            output.push('\n');
            for step in &report.next_steps {
                output.push_str(&format!("  * {}\n", step));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as the plain-text quality gate summary
    pub fn format_text(report: &GateReport) -> String {
        render_summary(&report.results)
    }

    /// Format as JSON
    pub fn format_json(report: &GateReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_result(result: &GateResult) -> String {
        let mut output = String::new();

        let label = if result.passed() {
            format!("PASSED  {}", result.gate()).green().bold()
        } else {
            format!("FAILED  {}", result.gate()).red().bold()
        };
        output.push_str(&format!("\n{}\n", label));

        if let Some(reason) = result.reason() {
            output.push_str(&format!("  {} {}\n", "Reason:".bold(), reason));
        }
        if let Some(files) = result.missing_files()
            && !files.is_empty()
        {
            output.push_str(&format!("  {}\n", "Missing files:".bold()));
            for file in files {
                output.push_str(&format!("    - {}\n", file.yellow()));
            }
        }
        if result.is_violation() {
            output.push_str(&format!(
                "  {}\n",
                "WORKFLOW VIOLATION DETECTED".red().bold()
            ));
        }
        if let Some(remediation) = result.remediation() {
            output.push_str(&format!("  {}\n", "Remediation:".bold()));
            output.push_str(&Self::indent(remediation, "    "));
            output.push('\n');
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &GateReport) -> String {
        Self::format(report)
    }

    fn format_text(&self, report: &GateReport) -> String {
        Self::format_text(report)
    }

    fn format_json(&self, report: &GateReport) -> String {
        Self::format_json(report)
    }
}
