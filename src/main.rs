//! Compass - campus routing and class schedule checks
//!
//! Loads a campus walkway graph and class table from CSV, then runs
//! student roster, routing and schedule commands against it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use compass_core::error::{CompassError, ExitCode as CompassExitCode};
use compass_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout; every other clap failure is a usage
        // error, reported as JSON when argv asked for it.
        Err(err) if err.use_stderr() && argv_requests_json() => {
            let usage = CompassError::UsageError(err.to_string());
            eprintln!("{}", usage.to_json());
            return exit_with(usage.exit_code());
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(CompassExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: CompassExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// `--format json` or `--format=json` anywhere in argv
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}
