use crate::fs::FileSystem;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary record written to the target root once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoMetadata {
    pub info_names: Vec<String>,
    pub number_of_infos: usize,
}

impl InfoMetadata {
    pub fn new(info_names: Vec<String>) -> Self {
        let number_of_infos = info_names.len();
        Self {
            info_names,
            number_of_infos,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize metadata")
    }
}

/// Serializes `names` to `path`, replacing any existing file
pub fn write_metadata(fs: &dyn FileSystem, path: &Path, names: &[String]) -> Result<InfoMetadata> {
    let metadata = InfoMetadata::new(names.to_vec());
    let json = metadata.to_json()?;

    fs.write_string(path, &json)
        .with_context(|| format!("Failed to write metadata to {}", path.display()))?;

    Ok(metadata)
}

pub fn read_metadata(fs: &dyn FileSystem, path: &Path) -> Result<InfoMetadata> {
    let content = fs.read_to_string(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid metadata in {}", path.display()))
}
