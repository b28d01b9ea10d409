//! Graphwalk - weighted graph traversal CLI
//!
//! Loads an undirected weighted graph from a text file and reports
//! depth-first and breadth-first traversals, a Prim minimum spanning tree
//! and a Dijkstra shortest path tree.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use graphwalk_core::error::{ExitCode as GraphExitCode, GraphError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let informational = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            // `cli.format` is unavailable here, so look for `--format json` in argv
            if !informational && wants_json(env::args().skip(1)) {
                let error = parse_failure(&err);
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }
            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Classify a command-line parse failure for the JSON error envelope
fn parse_failure(err: &clap::Error) -> GraphError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    }
}

/// Whether `args` ask for JSON output, in either `--format json` or `--format=json` form
fn wants_json<I: Iterator<Item = String>>(mut args: I) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|value| value == "json") => return true,
            _ => {}
        }
    }
    false
}
