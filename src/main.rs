//! Trellis - weighted undirected graph toolkit
//!
//! Loads a graph description from a file or stdin, then answers
//! shortest-path, spanning-tree and cycle queries over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use trellis_core::error::{ExitCode as TrellisExitCode, TrellisError};
use trellis_core::format::OutputFormat;
use trellis_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TrellisExitCode::Success as u8),
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

/// `--format` is a global flag, but clap may fail before the flag can be
/// inspected through `Cli.format`; fall back to scanning argv so parse
/// errors still come out as JSON envelopes when asked for.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if !argv_requests_json() {
        err.exit();
    }

    let trellis_error = match err.kind() {
        // Help and version are informational, not errors - let clap handle them
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => err.exit(),
        clap::error::ErrorKind::ValueValidation
        | clap::error::ErrorKind::InvalidValue
        | clap::error::ErrorKind::InvalidSubcommand
        | clap::error::ErrorKind::UnknownArgument
        | clap::error::ErrorKind::MissingRequiredArgument => {
            TrellisError::UsageError(err.to_string())
        }
        _ => TrellisError::Other(err.to_string()),
    };

    eprintln!("{}", trellis_error.to_json());
    ExitCode::from(trellis_error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
