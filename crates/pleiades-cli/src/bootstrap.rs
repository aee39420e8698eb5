//! CLI bootstrap - the composition root.
//!
//! Logging is initialized and the index is built here, so command handlers
//! only ever see a ready [`CliContext`].

use std::path::PathBuf;

use pleiades_core::{IndexOrigin, PidIndex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the JSON documents.
    pub root: PathBuf,
    /// Optional catalog that replaces the directory scan.
    pub catalog: Option<PathBuf>,
}

impl CliConfig {
    /// Build config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            catalog: cli.catalog.clone(),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    index: PidIndex,
}

impl CliContext {
    /// Wrap an already built index.
    pub const fn new(index: PidIndex) -> Self {
        Self { index }
    }

    /// Access the index.
    pub const fn index(&self) -> &PidIndex {
        &self.index
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the index described by `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let index = PidIndex::open(&config.root, config.catalog.as_deref())?;
    match index.origin() {
        IndexOrigin::Scan => info!(
            root = %config.root.display(),
            entries = index.len(),
            "scanned data directory"
        ),
        IndexOrigin::Catalog(catalog) => info!(
            catalog = %catalog.display(),
            entries = index.len(),
            "loaded catalog"
        ),
    }
    Ok(CliContext::new(index))
}
