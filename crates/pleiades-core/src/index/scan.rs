//! Recursive scan of a root directory for `<PID>.json` documents.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use super::IndexError;
use super::pid::pid_from_file_name;

/// Lazily yields every non-directory entry under `root`.
///
/// Symbolic links are not followed when descending, so a link to a directory
/// is yielded as an entry rather than walked into.
fn files_under(root: &Path) -> impl Iterator<Item = Result<walkdir::DirEntry, walkdir::Error>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter(|entry| !entry.as_ref().is_ok_and(|e| e.file_type().is_dir()))
}

/// Builds a fresh PID map from the files under `root`.
///
/// Fails if `root` is not a directory, and on the first duplicate PID;
/// nothing built so far is returned.
pub(crate) fn scan_tree(root: &Path) -> Result<HashMap<String, PathBuf>, IndexError> {
    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("{} is not a directory", root.display()),
        )
        .into());
    }

    let mut index = HashMap::new();

    for entry in files_under(root) {
        let entry = entry?;
        // Links to regular files count as files
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            trace!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        let Some(pid) = pid_from_file_name(name) else {
            trace!(path = %entry.path().display(), "skipping non-document file");
            continue;
        };

        match index.entry(pid.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(entry.into_path());
            }
            Entry::Occupied(slot) => {
                return Err(IndexError::DuplicateEntry {
                    pid: slot.key().clone(),
                    path: entry.into_path(),
                });
            }
        }
    }

    Ok(index)
}
