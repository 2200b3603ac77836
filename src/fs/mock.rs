use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
}

/// In-memory file system. Entries are kept sorted, so `read_dir` order is
/// deterministic.
pub struct MockFileSystem {
    files: RwLock<BTreeMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(BTreeMap::new()),
            root: root.clone(),
        };
        fs.add_dir(root);
        fs
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// All paths currently stored, in sorted order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.read().unwrap().keys().cloned().collect()
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }

    fn is_dir_in(files: &BTreeMap<PathBuf, MockEntry>, path: &Path) -> bool {
        files
            .get(path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        Self::is_dir_in(&self.files.read().unwrap(), &path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();

        if !Self::is_dir_in(&files, &path) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        let entries = files
            .iter()
            .filter(|(file_path, _)| file_path.parent() == Some(path.as_path()))
            .map(|(file_path, entry)| DirEntry {
                path: file_path.clone(),
                name: file_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                file_type: entry.file_type,
            })
            .collect();

        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let path = self.normalize_path(path);
        if self.files.read().unwrap().contains_key(&path) {
            Ok(path)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if files.contains_key(&path) {
            return Err(anyhow!("Path already exists: {:?}", path));
        }
        match path.parent() {
            Some(parent) if Self::is_dir_in(&files, parent) => {}
            _ => return Err(anyhow!("Parent directory not found: {:?}", path)),
        }

        files.insert(
            path,
            MockEntry {
                content: None,
                file_type: FileType::Directory,
            },
        );
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if !Self::is_dir_in(&files, &path) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        files.retain(|file_path, _| !file_path.starts_with(&path));
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> Result<()> {
        let from = self.normalize_path(from);
        let to = self.normalize_path(to);
        let mut files = self.files.write().unwrap();

        if !Self::is_dir_in(&files, &from) {
            return Err(anyhow!("Directory not found: {:?}", from));
        }

        let copied: Vec<(PathBuf, MockEntry)> = files
            .iter()
            .filter_map(|(file_path, entry)| {
                file_path
                    .strip_prefix(&from)
                    .ok()
                    .map(|relative| (to.join(relative), entry.clone()))
            })
            .collect();

        Self::ensure_parents(&mut files, &to);
        for (path, entry) in copied {
            files.insert(path, entry);
        }
        Ok(())
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if Self::is_dir_in(&files, &path) {
            return Err(anyhow!("Is a directory: {:?}", path));
        }
        match path.parent() {
            Some(parent) if Self::is_dir_in(&files, parent) => {}
            _ => return Err(anyhow!("Parent directory not found: {:?}", path)),
        }

        files.insert(
            path,
            MockEntry {
                content: Some(contents.to_string()),
                file_type: FileType::File,
            },
        );
        Ok(())
    }
}
