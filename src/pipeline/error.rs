use std::path::PathBuf;

/// Fatal run errors. Build failures are not errors; they are reported
/// through `BuildOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("Directory {} would map onto the target root itself", .0.display())]
    EmptyDerivedName(PathBuf),

    #[error(
        "Directory {} derives the reserved name '{name}'",
        .path.display()
    )]
    ReservedDerivedName { path: PathBuf, name: String },

    #[error(
        "Copying {} to {} would overwrite the source",
        .info_dir.display(),
        .destination.display()
    )]
    OverlappingPaths {
        info_dir: PathBuf,
        destination: PathBuf,
    },

    #[error("Failed to scan source directory: {0:#}")]
    Discovery(#[source] anyhow::Error),

    #[error("Failed to prepare target directory: {0:#}")]
    TargetRoot(#[source] anyhow::Error),

    #[error("Failed to copy '{name}': {source:#}")]
    Materialize {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to inspect '{name}' for building: {source:#}")]
    Build {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write metadata: {0:#}")]
    Metadata(#[source] anyhow::Error),
}
