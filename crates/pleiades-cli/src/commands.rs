//! Commands enum.

use clap::Subcommand;

/// Available commands.
///
/// Every command builds the index first, by scan or from the catalog.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the JSON document for a PID
    Get {
        /// Pleiades identifier, e.g. 295374
        pid: String,
    },

    /// Print the file path indexed for a PID
    Path {
        /// Pleiades identifier, e.g. 295374
        pid: String,
    },

    /// List every indexed PID
    List,

    /// Print the number of indexed documents
    Count,

    /// Check every index entry against the filesystem
    Verify,
}
