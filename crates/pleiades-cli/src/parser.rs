//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for looking up Pleiades JSON documents by PID.
///
/// Global options pick the data directory and, optionally, a catalog file
/// that replaces the directory scan.
#[derive(Parser)]
#[command(name = "pleiades")]
#[command(about = "Look up local Pleiades JSON documents by PID")]
#[command(version)]
pub struct Cli {
    /// Directory holding the Pleiades JSON documents
    #[arg(long, env = "PLEIADES_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Load the index from this catalog instead of scanning the root
    #[arg(long, env = "PLEIADES_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "pleiades",
            "--root",
            "/data/pleiades",
            "get",
            "295374",
            "--catalog",
            "/data/catalog.json",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.root, PathBuf::from("/data/pleiades"));
        assert_eq!(cli.catalog, Some(PathBuf::from("/data/catalog.json")));
        assert!(matches!(cli.command, Commands::Get { ref pid } if pid == "295374"));
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["pleiades"]).is_err());
    }
}
