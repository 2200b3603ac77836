use crate::fs::FileSystem;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Creates `path` if it does not exist yet. Only the last component is
/// created; a missing parent is an error.
pub fn ensure_dir(fs: &dyn FileSystem, path: &Path) -> Result<()> {
    if fs.exists(path) {
        return Ok(());
    }

    debug!(path = %path.display(), "Creating directory");
    fs.create_dir(path)
        .with_context(|| format!("Failed to create target root {}", path.display()))
}

/// Replaces `dest` with a fresh recursive copy of `src`. Anything previously
/// at `dest` is deleted first. Not atomic.
pub fn replace_dir(fs: &dyn FileSystem, src: &Path, dest: &Path) -> Result<()> {
    if fs.exists(dest) {
        debug!(dest = %dest.display(), "Removing existing directory");
        fs.remove_dir_all(dest)
            .with_context(|| format!("Failed to clear {}", dest.display()))?;
    }

    fs.copy_dir_all(src, dest).with_context(|| {
        format!("Failed to copy {} to {}", src.display(), dest.display())
    })
}
