//! Shortpath - shortest paths over weighted edge-list graphs, and word
//! ladders over dictionaries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use shortpath_core::error::{ExitCode as PathExitCode, PathError};
use shortpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err, wants_json(env::args().skip(1))),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command failure the way the caller asked for and pick the exit code
fn report(cli: &Cli, err: &PathError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

/// clap failed before `Cli.format` existed; honor `--format json` from argv
/// with the same error envelope commands use.
fn exit_on_parse_error(err: clap::Error, json: bool) -> ExitCode {
    if !json {
        err.exit();
    }
    match clap_error_to_path_error(&err) {
        Some(path_error) => {
            eprintln!("{}", path_error.to_json());
            ExitCode::from(path_error.exit_code() as u8)
        }
        None => err.exit(),
    }
}

/// `None` for help and version output, which are not failures
fn clap_error_to_path_error(err: &clap::Error) -> Option<PathError> {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => Some(PathError::UsageError(message)),
        _ => Some(PathError::Other(message)),
    }
}

fn wants_json<I: IntoIterator<Item = String>>(args: I) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
