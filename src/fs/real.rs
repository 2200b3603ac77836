use super::{DirEntry, FileSystem, FileType};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let entries = fs::read_dir(path).context(format!("Failed to read directory {:?}", path))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = if path.is_file() {
                FileType::File
            } else if path.is_dir() {
                FileType::Directory
            } else {
                FileType::Symlink
            };

            result.push(DirEntry {
                path,
                name,
                file_type,
            });
        }

        Ok(result)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).context(format!("Failed to canonicalize path {:?}", path))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir(path).context(format!("Failed to create directory {:?}", path))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path).context(format!("Failed to remove directory {:?}", path))
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> Result<()> {
        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry.context(format!("Failed to walk directory {:?}", from))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .context("Walked entry escaped the copy root")?;
            let dest = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)
                    .context(format!("Failed to create directory {:?}", dest))?;
            } else {
                fs::copy(entry.path(), &dest).context(format!(
                    "Failed to copy {:?} to {:?}",
                    entry.path(),
                    dest
                ))?;
            }
        }

        Ok(())
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).context(format!("Failed to write file {:?}", path))
    }
}
