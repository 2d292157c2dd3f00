//! CLI entrypoint for Research Gates
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use gates_application::{CheckSessionInput, CheckSessionUseCase, ValidateGatesUseCase};
use gates_infrastructure::{ConfigLoader, FileConfig, JsonSessionSource, LocalArtifactStore};
use gates_presentation::{Cli, ConsoleFormatter, OutputFormat, ReportFormatter};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        ConsoleFormatter::disable_color();
    }

    // === Dependency Injection ===
    let store = match &cli.root {
        Some(root) => LocalArtifactStore::new(root),
        None => LocalArtifactStore::current_dir().context("Failed to resolve working directory")?,
    };
    let state_path = match &cli.state {
        Some(path) => path.clone(),
        None => store.root().join(&config.state.path),
    };
    info!("Reading workflow state from {}", state_path.display());

    let gates = ValidateGatesUseCase::new(Arc::new(store)).with_params(config.gates.to_gate_params());
    let use_case = CheckSessionUseCase::new(Arc::new(JsonSessionSource::new(state_path)), gates);

    let input = CheckSessionInput::new(cli.session.clone()).with_selection(cli.gate.into());
    let report = use_case.execute(input).await?;

    if !cli.quiet {
        let format = cli
            .output
            .or(config.output.format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Summary);

        let formatter: &dyn ReportFormatter = &ConsoleFormatter;
        println!("{}", formatter.render(&report, format));
    }

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Load and validate configuration, honoring `--no-config`
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Invalid configuration: {}", issue);
        }
        bail!("Configuration has {} invalid setting(s)", issues.len());
    }

    Ok(config)
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` wins over `-v` when set. With `--log-file`, the same events
/// are also written to that file through a non-blocking writer.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
