//! streamwatch CLI - run sample streams through the anomaly detector
//!
//! Commands:
//! - `simulate`: synthetic seasonal signal with injected spikes
//! - `replay`: recorded samples from a file or stdin
//! - `config`: print the effective configuration

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{replay, simulate};
pub use config::StreamwatchConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, RunSummary, VerdictSink};

/// streamwatch CLI application
#[derive(Parser)]
#[command(name = "streamwatch")]
#[command(about = "Online anomaly detection for scalar sample streams", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "STREAMWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Trailing window length
    #[arg(short, long, global = true)]
    window_size: Option<usize>,

    /// Baseline z-score threshold
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    threshold: Option<f64>,

    /// Print only flagged samples (the summary still counts everything)
    #[arg(short, long, global = true)]
    anomalies_only: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Stream a synthetic signal through the detector
    Simulate(simulate::SimulateArgs),

    /// Stream recorded samples through the detector
    Replay(replay::ReplayArgs),

    /// Print the effective configuration
    Config,
}

/// Where and how verdicts are written.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SinkOptions {
    pub format: OutputFormat,
    pub anomalies_only: bool,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing on stderr; stdout carries verdicts only
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .try_init();

    let mut config = StreamwatchConfig::load(cli.config.as_deref())?;
    if let Some(window_size) = cli.window_size {
        config.detector.window_size = window_size;
    }
    if let Some(threshold) = cli.threshold {
        config.detector.threshold = threshold;
    }

    let sink = SinkOptions {
        format: cli.output,
        anomalies_only: cli.anomalies_only,
    };

    // Execute command
    match cli.command {
        Commands::Simulate(args) => simulate::execute(args, config, sink),
        Commands::Replay(args) => replay::execute(args, config, sink),
        Commands::Config => show_config(&config, cli.output),
    }
}

fn show_config(config: &StreamwatchConfig, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print!("{}", config.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
