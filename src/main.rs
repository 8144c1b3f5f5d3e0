//! Routeplan - route planning over small weighted road networks
//!
//! A command-line front end for the routeplan core: uninformed search,
//! exhaustive tours, reachability sweeps, shortest paths and k best-cost
//! alternatives, with "what if" road closures applied per invocation.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use routeplan_core::error::{ExitCode as RouteExitCode, RouteError};
use routeplan_core::logging;

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
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
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

/// Report a command-line parse failure.
///
/// The failure happens before `Cli.format` exists, so the format is recovered
/// from argv; a JSON request gets the error envelope instead of clap's text.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || requested_format(env::args().skip(1)) != Some(OutputFormat::Json) {
        err.exit();
    }

    let route_error = RouteError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", route_error.to_json());
    ExitCode::from(route_error.exit_code() as u8)
}

/// Last `--format` value on the command line, if it names a known format
fn requested_format(mut args: impl Iterator<Item = String>) -> Option<OutputFormat> {
    let mut requested = None;
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if let Some(format) = value.and_then(|v| v.parse().ok()) {
            requested = Some(format);
        }
    }
    requested
}
