//! Command dispatch logic for compass

use std::time::Instant;

use crate::cli::Cli;
use compass_core::error::Result;

mod command;
mod handlers;

use command::{Command, CommandContext, DefaultCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => DefaultCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
