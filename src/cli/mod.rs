//! CLI argument parsing for shortpath
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{LadderArgs, PathsArgs};
use parse::parse_output_format;
pub use shortpath_core::format::OutputFormat;

/// Shortpath - shortest paths over weighted graphs and word ladders
#[derive(Parser, Debug)]
#[command(name = "shortpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level or filter directive (e.g. `info`, `shortpath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ~/.config/shortpath/config.toml)
    #[arg(long, global = true, env = "SHORTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print shortest paths from a source vertex of an edge-list graph
    Paths(PathsArgs),

    /// Find a shortest word ladder between two words
    Ladder(LadderArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_paths_command() {
        let cli =
            Cli::try_parse_from(["shortpath", "paths", "graph.txt", "--source", "2"]).unwrap();
        match cli.command {
            Some(Commands::Paths(args)) => {
                assert_eq!(args.graph, PathBuf::from("graph.txt"));
                assert_eq!(args.source, Some(2));
                assert_eq!(args.target, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shortpath", "ladder", "cat", "dog", "--format", "json", "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["shortpath", "--format", "records"]).is_err());
    }
}
