//! PID index over a directory of Pleiades JSON documents.
//!
//! This module provides the single [`PidIndex`] component:
//! - Scan a root directory for `<PID>.json` files
//! - Load a precomputed mapping from a catalog file
//! - Verify the mapping against the filesystem
//! - Look up and parse documents by PID
//!
//! # Design
//!
//! - Returns `IndexError` for every failure, wrapping I/O and JSON errors
//!   transparently so the original cause is preserved
//! - The directory walk and PID validation are kept private in `scan` and `pid`

mod catalog;
mod error;
mod pid;
mod pid_index;
mod scan;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::IndexError;

// PID rules
pub use pid::{CATALOG_STEM, JSON_EXTENSION, is_valid_pid};

// The index itself
pub use pid_index::{IndexOrigin, PidIndex};
