//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::dispatch::handlers;
use compass_core::config::CompassConfig;
use compass_core::error::Result;
use compass_core::load::{load_campus, LoadedCampus};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config file settings with `--edges`/`--classes` applied on top
    pub fn config(&self) -> Result<CompassConfig> {
        let cwd = env::current_dir()?;
        let mut config = CompassConfig::discover(self.cli.config.as_deref(), &cwd)?;

        if let Some(edges) = &self.cli.edges {
            config.data.edges = edges.clone();
        }
        if let Some(classes) = &self.cli.classes {
            config.data.classes = classes.clone();
        }

        tracing::debug!(elapsed = ?self.start.elapsed(), "resolve_config");
        Ok(config)
    }

    pub fn load_campus(&self) -> Result<LoadedCampus> {
        let config = self.config()?;
        let loaded = load_campus(
            &config.data.edges,
            &config.data.classes,
            config.limits.max_classes_per_student,
        )?;

        tracing::debug!(elapsed = ?self.start.elapsed(), "load_campus");
        Ok(loaded)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Bare `compass` reads commands from stdin
pub struct DefaultCommand;

impl Command for DefaultCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        handlers::execute_run(ctx, None)
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run { script } => handlers::execute_run(ctx, script.as_deref()),
            Commands::Exec { command } => handlers::execute_exec(ctx, command),
            Commands::Summary => handlers::execute_summary(ctx),
        }
    }
}
