//! Finding snapshot directories under a results root.
//!
//! Results are laid out as `<root>/<project>/<snapshot>/`. Hidden entries are
//! skipped at both levels.

use crate::errors::{Result, SnapshotError};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// True when the project or snapshot component starts with a dot.
fn is_hidden(root: &Path, entry: &DirEntry) -> bool {
    entry
        .path()
        .strip_prefix(root)
        .map(|relative| {
            relative
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .unwrap_or(false)
}

/// Every `<project>/<snapshot>` directory under `root`, sorted by path.
pub fn discover_snapshots(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SnapshotError::discovery(root, "results root is not a directory"));
    }

    let mut snapshots = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(|e| SnapshotError::discovery(root, e.to_string()))?;
        if entry.file_type().is_dir() && !is_hidden(root, &entry) {
            snapshots.push(entry.into_path());
        }
    }

    Ok(snapshots)
}
