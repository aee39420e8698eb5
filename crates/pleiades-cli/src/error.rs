//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `IndexError` to exit codes and user-facing messages.

use pleiades_core::IndexError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested PID is not in the index.
    #[error("{0}")]
    NotIndexed(String),

    /// The index or a document disagrees with the data on disk.
    #[error("Data error: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotIndexed(_) => 1,
            Self::Data(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,   // EX_IOERR
        }
    }
}

impl From<IndexError> for CliError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::NotIndexed { .. } => Self::NotIndexed(err.to_string()),
            IndexError::DuplicateEntry { .. }
            | IndexError::NoIndexDefined
            | IndexError::WrongExtension { .. }
            | IndexError::NotAFile { .. }
            | IndexError::Json(_) => Self::Data(err.to_string()),
            IndexError::Io(_) | IndexError::Walk(_) => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
