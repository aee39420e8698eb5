//! Catalog file reader.
//!
//! A catalog is a JSON object mapping PID strings to document paths. Paths are
//! taken verbatim, so relative paths resolve against the working directory.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::IndexError;
use super::pid::is_valid_pid;

/// On-disk catalog layout. Duplicate keys keep the last value.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Catalog(HashMap<String, PathBuf>);

/// Reads the catalog at `path` into a PID map.
pub(crate) fn read_catalog(path: &Path) -> Result<HashMap<String, PathBuf>, IndexError> {
    let reader = BufReader::new(File::open(path)?);
    let Catalog(entries) = serde_json::from_reader::<_, Catalog>(reader)?;

    for pid in entries.keys().filter(|pid| !is_valid_pid(pid)) {
        warn!(pid = %pid, catalog = %path.display(), "catalog key is not a canonical PID");
    }
    debug!(catalog = %path.display(), entries = entries.len(), "loaded catalog");

    Ok(entries)
}
