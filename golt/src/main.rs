//! Golt CLI - A command-line driver for the golex scanner.
//!
//! This is the main entry point for the golt CLI application.
//! It uses clap for argument parsing and dispatches to the scan, stream
//! or init command handler based on user input.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, run_init, run_scan, run_stream, InitArgs, ScanArgs, StreamArgs,
};
use config::Config;
use error::{GoltError, Result};

/// Golt - Tokenize Go-like source files
///
/// Golt scans a source file and prints every token with its position,
/// either as an aligned table or as JSON.
#[derive(Parser, Debug)]
#[command(name = "golt")]
#[command(author = "Golex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Go-like source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GOLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GOLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GOLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the golt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a file and print all of its tokens
    ///
    /// The whole file is scanned before anything is printed, so a scan
    /// error produces no token output.
    Scan(ScanCommand),

    /// Print tokens as they are scanned
    ///
    /// Rows are printed one at a time; rows printed before a scan error
    /// are kept.
    Stream(StreamCommand),

    /// Write a default golt.toml
    Init(InitCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit comment tokens
    #[arg(long)]
    no_comments: bool,
}

/// Arguments for the stream subcommand.
#[derive(Parser, Debug)]
struct StreamCommand {
    /// Source file to scan
    file: PathBuf,

    /// Omit comment tokens
    #[arg(long)]
    no_comments: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write golt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing golt.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the golt CLI.
///
/// Any error is reported as `error: <message>` on stderr with a failing
/// exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging and run the selected command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, cli.config.as_deref(), &mut out)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never interleave with token output.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GoltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// Configuration is only loaded for commands that render tokens.
fn execute_command(
    command: Commands,
    config_path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Scan(args) => {
            let config = load_config(config_path)?;
            let scan_args = ScanArgs {
                file: args.file,
                format: args.format,
                no_comments: args.no_comments,
            };
            run_scan(scan_args, &config, out)
        },
        Commands::Stream(args) => {
            let config = load_config(config_path)?;
            let stream_args = StreamArgs {
                file: args.file,
                no_comments: args.no_comments,
            };
            run_stream(stream_args, &config, out)
        },
        Commands::Init(args) => {
            let init_args = InitArgs {
                path: args.path,
                force: args.force,
            };
            run_init(init_args, out)
        },
    }
}
