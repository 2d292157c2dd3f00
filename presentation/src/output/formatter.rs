//! Output formatter trait

use crate::cli::commands::OutputFormat;
use gates_application::GateReport;

/// Trait for formatting gate reports
pub trait ReportFormatter {
    /// Format the complete report for a terminal
    fn format(&self, report: &GateReport) -> String;

    /// Format as the plain-text quality gate summary
    fn format_text(&self, report: &GateReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &GateReport) -> String;

    /// Format in the selected output format
    fn render(&self, report: &GateReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Summary => self.format(report),
            OutputFormat::Text => self.format_text(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
