//! CLI argument parsing for compass
//!
//! Global flags select the data files, output format and logging; the
//! subcommand picks where campus commands come from.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Compass - campus routing and class schedule checks
#[derive(Parser, Debug)]
#[command(name = "compass")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to ./compass.toml when present)
    #[arg(long, global = true, env = "COMPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Edges CSV, overrides the config file
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Classes CSV, overrides the config file
    #[arg(long, global = true)]
    pub classes: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `compass_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run commands from a script file, or stdin when omitted
    ///
    /// A first line holding only a number is read as the count of
    /// commands that follow.
    Run {
        /// Script file with one command per line
        script: Option<PathBuf>,
    },

    /// Run a single command, e.g. `compass exec "checkEdgeStatus 13 23"`
    Exec {
        /// Command line to execute
        command: String,
    },

    /// Show node, edge and class counts of the loaded data
    Summary,
}
