//! The PID → document path index.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::IndexError;
use super::catalog::read_catalog;
use super::pid::JSON_EXTENSION;
use super::scan::scan_tree;

/// Where the current mapping of a [`PidIndex`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOrigin {
    /// Derived by walking the root directory.
    Scan,
    /// Loaded from the given catalog file.
    Catalog(PathBuf),
}

/// Index of Pleiades JSON documents keyed by PID.
///
/// Each instance owns its mapping; nothing is shared between indexes.
/// [`reindex`](Self::reindex) replaces the mapping wholesale and needs
/// `&mut self`, so lookups can never observe a half-built index.
#[derive(Debug, Clone)]
pub struct PidIndex {
    root: PathBuf,
    entries: HashMap<String, PathBuf>,
    origin: IndexOrigin,
}

impl PidIndex {
    /// Build an index by scanning every file under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, IndexError> {
        let mut index = Self {
            root: root.into(),
            entries: HashMap::new(),
            origin: IndexOrigin::Scan,
        };
        index.reindex()?;
        Ok(index)
    }

    /// Build an index from a catalog file without scanning `root`.
    pub fn with_catalog(
        root: impl Into<PathBuf>,
        catalog: impl AsRef<Path>,
    ) -> Result<Self, IndexError> {
        let catalog = catalog.as_ref();
        Ok(Self {
            root: root.into(),
            entries: read_catalog(catalog)?,
            origin: IndexOrigin::Catalog(catalog.to_path_buf()),
        })
    }

    /// Load from `catalog` when given, otherwise scan `root`.
    pub fn open(root: impl Into<PathBuf>, catalog: Option<&Path>) -> Result<Self, IndexError> {
        match catalog {
            Some(catalog) => Self::with_catalog(root, catalog),
            None => Self::new(root),
        }
    }

    /// Directory this index was built for.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the mapping came from a scan or a catalog.
    pub const fn origin(&self) -> &IndexOrigin {
        &self.origin
    }

    /// Rescan the root directory and replace the current mapping.
    ///
    /// On failure the previous mapping is kept and nothing from the aborted
    /// scan survives.
    pub fn reindex(&mut self) -> Result<(), IndexError> {
        let entries = scan_tree(&self.root)?;
        debug!(root = %self.root.display(), entries = entries.len(), "indexed directory");
        self.entries = entries;
        self.origin = IndexOrigin::Scan;
        Ok(())
    }

    /// Read and parse the document indexed under `pid`.
    ///
    /// The file is read on every call. A stale path surfaces as
    /// [`IndexError::Io`], not as [`IndexError::NotIndexed`].
    pub fn get(&self, pid: &str) -> Result<Value, IndexError> {
        let path = self.path_of(pid).ok_or_else(|| IndexError::NotIndexed {
            pid: pid.to_string(),
        })?;
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Indexed path for `pid`, without touching the filesystem.
    pub fn path_of(&self, pid: &str) -> Option<&Path> {
        self.entries.get(pid).map(PathBuf::as_path)
    }

    /// Whether `pid` has an entry in the index.
    pub fn contains(&self, pid: &str) -> bool {
        self.entries.contains_key(pid)
    }

    /// Every indexed PID, in no particular order.
    pub fn get_pids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Check every entry against the filesystem.
    ///
    /// Stops at the first entry whose path lacks a `.json` extension or is not
    /// a regular file. Files on disk that are missing from the index are not
    /// detected.
    pub fn verify_index(&self) -> Result<(), IndexError> {
        if self.entries.is_empty() {
            return Err(IndexError::NoIndexDefined);
        }
        for (pid, path) in &self.entries {
            if path.extension() != Some(OsStr::new(JSON_EXTENSION)) {
                return Err(IndexError::WrongExtension {
                    pid: pid.clone(),
                    path: path.clone(),
                });
            }
            if !path.is_file() {
                return Err(IndexError::NotAFile {
                    pid: pid.clone(),
                    path: path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
