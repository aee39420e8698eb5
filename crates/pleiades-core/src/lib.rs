//! Local access to Pleiades gazetteer JSON by PID.
//!
//! The [`PidIndex`] maps Pleiades identifiers to the JSON documents that hold
//! them, either by scanning a directory tree or by loading a catalog file
//! produced elsewhere.
//!
//! ```no_run
//! use pleiades_core::PidIndex;
//!
//! let index = PidIndex::new("data/json")?;
//! index.verify_index()?;
//! let place = index.get("295374")?;
//! println!("{}", place["title"]);
//! # Ok::<(), pleiades_core::IndexError>(())
//! ```

#![deny(unused_crate_dependencies)]

pub mod index;

pub use index::{CATALOG_STEM, IndexError, IndexOrigin, JSON_EXTENSION, PidIndex, is_valid_pid};
