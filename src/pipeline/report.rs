//! Per-run results collected by the orchestrator

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened when the build step ran for one copied directory.
/// Build problems are recorded here and never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildOutcome {
    /// No file with the code extension in the directory
    Skipped,
    Succeeded {
        file: String,
        stdout: String,
        stderr: String,
    },
    Failed {
        file: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The build command could not be started at all
    SpawnFailed { file: String, error: String },
}

impl BuildOutcome {
    pub fn attempted(&self) -> bool {
        !matches!(self, BuildOutcome::Skipped)
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BuildOutcome::Failed { .. } | BuildOutcome::SpawnFailed { .. }
        )
    }

    pub fn file(&self) -> Option<&str> {
        match self {
            BuildOutcome::Skipped => None,
            BuildOutcome::Succeeded { file, .. }
            | BuildOutcome::Failed { file, .. }
            | BuildOutcome::SpawnFailed { file, .. } => Some(file),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuildOutcome::Skipped => "skipped",
            BuildOutcome::Succeeded { .. } => "ok",
            BuildOutcome::Failed { .. } => "failed",
            BuildOutcome::SpawnFailed { .. } => "not started",
        }
    }
}

/// One source directory that was copied (and possibly built)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedInfo {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub build: BuildOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub metadata_path: PathBuf,
    pub processed: Vec<ProcessedInfo>,
}

impl RunReport {
    pub fn names(&self) -> Vec<String> {
        self.processed.iter().map(|p| p.name.clone()).collect()
    }

    pub fn failed_builds(&self) -> usize {
        self.processed.iter().filter(|p| p.build.is_failure()).count()
    }
}
