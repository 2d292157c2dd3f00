//! CLI command definitions

use clap::{Parser, ValueEnum};
use gates_application::GateSelection;
use std::path::PathBuf;

/// Output format for gate reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored report with next steps
    Summary,
    /// Plain-text quality gate summary
    Text,
    /// JSON report
    Json,
}

impl From<gates_domain::OutputFormat> for OutputFormat {
    fn from(format: gates_domain::OutputFormat) -> Self {
        match format {
            gates_domain::OutputFormat::Summary => Self::Summary,
            gates_domain::OutputFormat::Text => Self::Text,
            gates_domain::OutputFormat::Json => Self::Json,
        }
    }
}

/// Which gates to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GateArg {
    /// Research completion gate only
    Research,
    /// Synthesis gates only
    Synthesis,
    /// Every gate whose phase has completed
    All,
}

impl From<GateArg> for GateSelection {
    fn from(arg: GateArg) -> Self {
        match arg {
            GateArg::Research => GateSelection::Research,
            GateArg::Synthesis => GateSelection::Synthesis,
            GateArg::All => GateSelection::All,
        }
    }
}

/// CLI arguments for research-gates
#[derive(Parser, Debug)]
#[command(name = "research-gates")]
#[command(author, version, about = "Quality gates for multi-agent research sessions")]
#[command(long_about = r#"
Research Gates checks that a research session produced the artifacts its
workflow requires before it moves on.

Gates:
1. Research completion: one note per subtopic exists
2. Synthesis: every note exists, the report-writer agent performed
   synthesis, and the recorded report file exists

Configuration files are loaded from (in priority order):
1. RESEARCH_GATES_* environment variables
2. --config <path>              Explicit config file
3. ./research-gates.toml        Project-level config
4. ~/.config/research-gates/config.toml   Global config

Exit status is 0 when every evaluated gate passed and 1 otherwise.

Example:
  research-gates
  research-gates --session research_20250101_120000 --gate synthesis
  research-gates -o json --state logs/state/current.json
"#)]
pub struct Cli {
    /// Path to the workflow state file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Session id to check (defaults to the current session)
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Directory artifact paths are resolved against (defaults to cwd)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Gates to evaluate
    #[arg(short, long, value_enum, default_value = "all")]
    pub gate: GateArg,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing; report only through the exit status
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
