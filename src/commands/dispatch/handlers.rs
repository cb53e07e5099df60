//! Handlers for the compass subcommands

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::render::{self, json};
use crate::commands::script::CommandLines;
use crate::commands::session::Session;
use compass_core::error::{CompassError, ExitCode, Result};
use compass_core::{bail_usage, trace_time};

/// Run every command of a script, or of stdin when `script` is `None`
///
/// Lines are executed as they are read, so replies to an interactive session
/// appear before input ends.
pub fn execute_run(ctx: &CommandContext, script: Option<&Path>) -> Result<()> {
    let loaded = ctx.load_campus()?;

    let source: Box<dyn BufRead> = match script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|e| CompassError::data_file(path, e))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    // First Ctrl-C stops before the next command; a second one exits while
    // still blocked on input.
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        if interrupted_clone.swap(true, Ordering::SeqCst) {
            std::process::exit(i32::from(ExitCode::Failure));
        }
    });

    let mut session = Session::new(loaded.campus);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut executed = 0usize;
    for line in CommandLines::new(source) {
        if interrupted.load(Ordering::SeqCst) {
            out.flush()?;
            tracing::info!(executed, "run interrupted");
            return Err(CompassError::Interrupted);
        }

        let reply = session.execute_line(&line?);
        render::write_reply(&mut out, ctx.cli.format, &reply)?;
        out.flush()?;
        executed += 1;
    }

    tracing::debug!(
        students = session.campus().roster().len(),
        "run finished"
    );
    trace_time!(ctx.start, "run", commands = executed);
    Ok(())
}

/// Run one command line
pub fn execute_exec(ctx: &CommandContext, command: &str) -> Result<()> {
    if command.trim().is_empty() {
        bail_usage!("exec needs a command line");
    }

    let loaded = ctx.load_campus()?;
    let mut session = Session::new(loaded.campus);

    let reply = session.execute_line(command);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::write_reply(&mut out, ctx.cli.format, &reply)?;
    out.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct Summary {
    nodes: usize,
    edges: usize,
    open_edges: usize,
    classes: usize,
    skipped_edge_rows: usize,
    skipped_class_rows: usize,
}

pub fn execute_summary(ctx: &CommandContext) -> Result<()> {
    let loaded = ctx.load_campus()?;
    let graph = loaded.campus.graph();

    let summary = Summary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        open_edges: graph.open_edge_count(),
        classes: loaded.campus.classes().len(),
        skipped_edge_rows: loaded.edges.skipped,
        skipped_class_rows: loaded.classes.skipped,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ctx.cli.format {
        OutputFormat::Json => json::write_line(&mut out, &summary)?,
        OutputFormat::Human => {
            writeln!(out, "nodes: {}", summary.nodes)?;
            writeln!(out, "edges: {} ({} open)", summary.edges, summary.open_edges)?;
            writeln!(out, "classes: {}", summary.classes)?;
            let skipped = summary.skipped_edge_rows + summary.skipped_class_rows;
            if skipped > 0 && !ctx.cli.quiet {
                writeln!(
                    out,
                    "skipped rows: {} edges, {} classes",
                    summary.skipped_edge_rows, summary.skipped_class_rows
                )?;
            }
        }
    }
    Ok(())
}
