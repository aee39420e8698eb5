//! Index error types.
//!
//! Domain failures carry the PID and/or path they concern. Filesystem and
//! JSON failures are wrapped transparently so callers see the original cause.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, verifying or reading a [`PidIndex`](super::PidIndex).
#[derive(Debug, Error)]
pub enum IndexError {
    /// Two files in the scanned tree share the same PID stem.
    #[error("Multiple JSON files for same PID: pid={pid}, filepath={}", .path.display())]
    DuplicateEntry { pid: String, path: PathBuf },

    /// The requested PID has no entry in the index.
    #[error("No entry for PID in file system index: {pid}")]
    NotIndexed { pid: String },

    /// Verification was requested against an empty index.
    #[error("No index is defined for the filesystem")]
    NoIndexDefined,

    /// An indexed path does not carry the `.json` extension.
    #[error("File path does not end in '.json': pid={pid}, filepath={}", .path.display())]
    WrongExtension { pid: String, path: PathBuf },

    /// An indexed path does not resolve to a regular file.
    #[error("File path does not resolve to a file: pid={pid}, filepath={}", .path.display())]
    NotAFile { pid: String, path: PathBuf },

    /// Reading a catalog or document failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catalog or document is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The directory walk could not read an entry.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl IndexError {
    /// The PID this error concerns, if any.
    pub fn pid(&self) -> Option<&str> {
        match self {
            Self::DuplicateEntry { pid, .. }
            | Self::NotIndexed { pid }
            | Self::WrongExtension { pid, .. }
            | Self::NotAFile { pid, .. } => Some(pid),
            Self::NoIndexDefined | Self::Io(_) | Self::Json(_) | Self::Walk(_) => None,
        }
    }

    /// The file path this error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DuplicateEntry { path, .. }
            | Self::WrongExtension { path, .. }
            | Self::NotAFile { path, .. } => Some(path),
            Self::Walk(err) => err.path(),
            Self::NotIndexed { .. } | Self::NoIndexDefined | Self::Io(_) | Self::Json(_) => None,
        }
    }
}
