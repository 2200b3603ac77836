use crate::fs::FileSystem;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Case-insensitive marker test on a directory name
pub fn matches_marker(name: &str, marker: &str) -> bool {
    name.to_lowercase().contains(&marker.to_lowercase())
}

/// Returns the immediate subdirectories of `source_root` whose name contains
/// `marker`, in the order the directory listing reports them. Never descends
/// below the first level.
pub fn find_info_paths(
    fs: &dyn FileSystem,
    source_root: &Path,
    marker: &str,
) -> Result<Vec<PathBuf>> {
    let entries = fs
        .read_dir(source_root)
        .with_context(|| format!("Failed to list source root {}", source_root.display()))?;

    let mut info_paths = Vec::new();
    for entry in entries {
        if !entry.is_dir() {
            continue;
        }
        if matches_marker(entry.file_name(), marker) {
            debug!(dir = %entry.file_name(), "Matched info directory");
            info_paths.push(entry.path().to_path_buf());
        }
    }

    Ok(info_paths)
}
