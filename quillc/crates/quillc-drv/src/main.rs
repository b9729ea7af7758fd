//! quillc CLI - command-line front-end for the Quill scanner.
//!
//! Parses arguments with clap, initializes logging, loads configuration and
//! dispatches to the session's `tokens` or `check` runs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quillc_drv::{Config, DriverError, OutputFormat, Session, TokensOptions};

/// quillc - the Quill language front-end
#[derive(Parser, Debug)]
#[command(name = "quillc")]
#[command(author = "Quill Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Quill source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "QUILLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QUILLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "QUILLC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// Use `-` to read from standard input.
    Tokens(TokensCommand),

    /// Scan each file and report whether it is lexically valid
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit `line:col` from text output
    #[arg(long)]
    no_positions: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.verbose, cli.no_color || !config.color)?;
    debug!(?config, "configuration loaded");

    let mut session = Session::new(config);
    execute_command(cli.command, &mut session)?;
    Ok(())
}

/// Print a failure: lexical errors as a rendered diagnostic, anything else
/// as a single `error:` line.
fn report(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = match err.downcast_ref::<DriverError>().and_then(DriverError::diagnostic) {
        Some(diagnostic) => write!(stderr, "{}", diagnostic.render()),
        None => writeln!(stderr, "error: {err:#}"),
    };
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> quillc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, session: &mut Session) -> quillc_drv::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tokens(args) => {
            let options = tokens_options(&args, &session.config);
            session.run_tokens(&args.files, options, &mut out)
        },
        Commands::Check(args) => session.run_check(&args.files, &mut out, &mut io::stderr()),
    }
}

/// Merge command-line flags over configuration.
fn tokens_options(args: &TokensCommand, config: &Config) -> TokensOptions {
    let mut options = TokensOptions::from(config);
    if let Some(format) = args.format {
        options.format = format;
    }
    if args.no_positions {
        options.show_positions = false;
    }
    options
}
