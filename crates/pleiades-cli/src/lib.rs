//! Command-line front end for `pleiades-core`.
//!
//! Builds a `PidIndex` from `--root` (or `--catalog`) and runs one command
//! against it.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
