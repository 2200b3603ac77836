use std::path::{Path, PathBuf};

/// Base name of `path` with the first occurrence of `to_strip` removed.
/// The substring may sit anywhere in the name.
pub fn derive_name(path: &Path, to_strip: &str) -> String {
    let dir_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if to_strip.is_empty() {
        return dir_name;
    }
    dir_name.replacen(to_strip, "", 1)
}

/// One derived name per path, positionally paired with the input
pub fn derive_names(paths: &[PathBuf], to_strip: &str) -> Vec<String> {
    paths.iter().map(|p| derive_name(p, to_strip)).collect()
}
