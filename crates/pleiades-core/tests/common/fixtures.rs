//! Test fixtures for creating document trees.
//!
//! Documents are spread over nested directories the way the Pleiades JSON
//! export shards them, so scans have something to recurse into.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("failed to create fixture dir");
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Relative location of a document, sharded by the first two digit pairs.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(document_path("295374"), "29/53/295374.json");
/// ```
pub fn document_path(pid: &str) -> String {
    let first = &pid[..pid.len().min(2)];
    let second = pid.get(2..4).unwrap_or("00");
    format!("{first}/{second}/{pid}.json")
}

/// Writes a minimal place document for `pid` and returns its path.
pub fn write_place(root: &Path, pid: &str) -> PathBuf {
    let body = json!({
        "id": pid,
        "title": format!("Place {pid}"),
        "@type": "Place",
    });
    write_file(root, &document_path(pid), &body.to_string())
}

/// Creates a tree holding one place document per PID.
pub fn place_tree(pids: &[String]) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    for pid in pids {
        write_place(dir.path(), pid);
    }
    dir
}

/// `count` distinct PIDs in the Pleiades numbering range.
pub fn sample_pids(count: usize) -> Vec<String> {
    (0..count).map(|i| (101_000_000 + i * 7_919).to_string()).collect()
}

/// Writes a catalog at `root/catalog.json` covering `entries`.
pub fn write_catalog(root: &Path, entries: &[(String, PathBuf)]) -> PathBuf {
    let map: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(pid, path)| (pid.clone(), json!(path)))
        .collect();
    write_file(root, "catalog.json", &serde_json::Value::Object(map).to_string())
}
