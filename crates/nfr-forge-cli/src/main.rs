// crates/nfr-forge-cli/src/main.rs
// ============================================================================
// Module: NFR Forge CLI Entry Point
// Description: Command dispatcher for challenge enhancement workflows.
// Purpose: Provide a strict, fail-closed CLI around the synthesis engine.
// Dependencies: clap, nfr-forge-config, nfr-forge-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The NFR Forge CLI reads challenge catalogs, runs the synthesis engine,
//! and writes the enhanced catalog back out as JSON. All inputs are
//! untrusted: catalog reads are size-capped, configuration is validated
//! before use, and every failure exits non-zero with a message on stderr.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use nfr_forge_cli::Catalog;
use nfr_forge_config::ForgeConfig;
use nfr_forge_config::config_toml_example;
use nfr_forge_core::BaselineMetrics;
use nfr_forge_core::classify;
use nfr_forge_core::extract;
use nfr_forge_core::try_enhance;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "nfr-forge", version, arg_required_else_help = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Enhance a challenge catalog with a synthesized NFR test suite.
    Enhance(EnhanceCommand),
    /// Print the baseline metrics derived for each challenge.
    Baseline(BaselineCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `enhance` command.
#[derive(Args, Debug)]
struct EnhanceCommand {
    /// Path to the challenge catalog JSON (single object or array).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output path; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Optional configuration file overriding engine defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

/// Arguments for the `baseline` command.
#[derive(Args, Debug)]
struct BaselineCommand {
    /// Path to the challenge catalog JSON (single object or array).
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Optional configuration file overriding engine defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print an annotated example configuration document.
    Example,
    /// Validate a configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for the `config validate` command.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "FILE")]
    path: PathBuf,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a rendered message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a rendered message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enhance(command) => command_enhance(&command),
        Commands::Baseline(command) => command_baseline(&command),
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

// ============================================================================
// SECTION: Enhance Command
// ============================================================================

/// Executes the `enhance` command.
fn command_enhance(command: &EnhanceCommand) -> CliResult<ExitCode> {
    let config = resolve_config(command.config.as_deref())?;
    let table = config.multiplier_table();
    let defaults = config.baseline_defaults();
    let catalog = load_catalog(&command.input)?;
    let enhanced = catalog
        .try_map(|spec| try_enhance(spec, &table, &defaults))
        .map_err(|err| CliError::new(format!("enhancement failed: {err}")))?;
    let rendered = enhanced
        .to_json(command.pretty)
        .map_err(|err| CliError::new(err.to_string()))?;
    match &command.output {
        Some(path) => write_output_file(path, &rendered)?,
        None => write_stdout_line(&rendered)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Baseline Command
// ============================================================================

/// Executes the `baseline` command.
fn command_baseline(command: &BaselineCommand) -> CliResult<ExitCode> {
    let config = resolve_config(command.config.as_deref())?;
    let defaults = config.baseline_defaults();
    let catalog = load_catalog(&command.input)?;
    let baselines: Vec<BaselineMetrics> = catalog
        .specs()
        .iter()
        .map(|spec| extract(spec, &defaults, classify(spec)))
        .collect();
    let rendered = serde_json::to_string_pretty(&baselines)
        .map_err(|err| CliError::new(format!("failed to render baselines: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes a `config` subcommand.
fn command_config(command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Example => {
            write_stdout_line(config_toml_example().trim_end())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Validate(validate) => {
            ForgeConfig::load(&validate.path).map_err(|err| CliError::new(err.to_string()))?;
            write_stdout_line("config ok")
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Loads and validates the configuration, built-ins when no path is given.
fn resolve_config(path: Option<&Path>) -> CliResult<ForgeConfig> {
    match path {
        Some(path) => ForgeConfig::load(path).map_err(|err| CliError::new(err.to_string())),
        None => Ok(ForgeConfig::default()),
    }
}

/// Loads a challenge catalog with limits enforced.
fn load_catalog(path: &Path) -> CliResult<Catalog> {
    Catalog::load(path).map_err(|err| CliError::new(err.to_string()))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes rendered output to a file with a trailing newline.
fn write_output_file(path: &Path, rendered: &str) -> CliResult<()> {
    let mut contents = rendered.to_string();
    contents.push('\n');
    fs::write(path, contents).map_err(|err| {
        CliError::new(format!("failed to write output {}: {err}", path.display()))
    })
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
