//! # manilint CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and runs the
//! validator. Missing arguments print usage and exit non-zero before any
//! file is touched.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use manilint_cli::validate::{run_validate, ValidateArgs};

/// Validate a configuration manifest before it ships.
///
/// Checks required fields, typed defaults and bounds, csv/pattern/length
/// constraints, and `enabled.when` cross-references.
#[derive(Parser, Debug)]
#[command(name = "manilint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("manilint v{} starting", env!("CARGO_PKG_VERSION"));

    match run_validate(&cli.args, manilint_cli::config::from_env()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
