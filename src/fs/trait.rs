//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

/// Abstraction over the file system operations the pipeline performs
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List the immediate children of a directory
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Resolve a path to its absolute form with symlinks followed. The path
    /// must exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Create a single directory. The parent must already exist.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Recursively delete a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Recursively copy the contents of `from` into `to`, creating `to`
    fn copy_dir_all(&self, from: &Path, to: &Path) -> Result<()>;

    /// Write a file, truncating any existing content
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
