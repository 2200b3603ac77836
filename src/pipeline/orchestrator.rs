use super::error::PipelineError;
use super::phases::{
    build::build_info_code,
    discover::find_info_paths,
    materialize::{ensure_dir, replace_dir},
    metadata::write_metadata,
    naming::derive_names,
};
use super::report::{ProcessedInfo, RunReport};
use crate::config::PipelineSettings;
use crate::fs::{FileSystem, RealFileSystem};
use crate::process::{CommandRunner, SystemCommandRunner};
use crate::progress::{ProgressEvent, ProgressHandler};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs discovery, copy, build and cataloguing for one source/target pair
pub struct Orchestrator {
    file_system: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
    settings: PipelineSettings,
    progress_handler: Option<Arc<dyn ProgressHandler>>,
}

impl Orchestrator {
    pub fn new(
        file_system: Arc<dyn FileSystem>,
        runner: Arc<dyn CommandRunner>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            file_system,
            runner,
            settings,
            progress_handler: None,
        }
    }

    /// Orchestrator backed by the real file system and process spawning
    pub fn system(settings: PipelineSettings) -> Self {
        Self::new(
            Arc::new(RealFileSystem::new()),
            Arc::new(SystemCommandRunner::new()),
            settings,
        )
    }

    pub fn with_progress_handler(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = Some(handler);
        self
    }

    /// Resolves `source` and `target` against the process current directory
    /// and runs the pipeline.
    pub fn run(&self, source: &Path, target: &Path) -> Result<RunReport, PipelineError> {
        let cwd = env::current_dir().map_err(PipelineError::CurrentDir)?;
        self.run_from(&cwd, source, target)
    }

    /// Same as [`run`](Self::run) with an explicit base directory
    pub fn run_from(
        &self,
        base: &Path,
        source: &Path,
        target: &Path,
    ) -> Result<RunReport, PipelineError> {
        let result = self.execute(base.join(source), base.join(target));
        if let Err(e) = &result {
            self.emit(ProgressEvent::Failed {
                error: e.to_string(),
            });
        }
        result
    }

    fn execute(&self, source_root: PathBuf, target_root: PathBuf) -> Result<RunReport, PipelineError> {
        let start = Instant::now();
        let fs = self.file_system.as_ref();

        if !fs.exists(&source_root) {
            return Err(PipelineError::SourceNotFound(source_root));
        }
        if !fs.is_dir(&source_root) {
            return Err(PipelineError::SourceNotDirectory(source_root));
        }

        self.emit(ProgressEvent::Started {
            source_root: source_root.display().to_string(),
            target_root: target_root.display().to_string(),
        });

        let info_paths = find_info_paths(fs, &source_root, &self.settings.dir_pattern)
            .map_err(PipelineError::Discovery)?;
        let names = derive_names(&info_paths, &self.settings.name_suffix);
        check_names(&info_paths, &names, &self.settings.metadata_file_name)?;
        check_overlap(fs, &info_paths, &names, &target_root)?;

        self.emit(ProgressEvent::DirectoriesDiscovered {
            count: info_paths.len(),
        });

        ensure_dir(fs, &target_root).map_err(PipelineError::TargetRoot)?;

        let total = info_paths.len();
        let mut processed = Vec::with_capacity(total);
        for (index, (src, name)) in info_paths.iter().zip(&names).enumerate() {
            let dest = target_root.join(name);
            debug!(src = %src.display(), dest = %dest.display(), "Materializing");

            let copy_start = Instant::now();
            replace_dir(fs, src, &dest).map_err(|source| PipelineError::Materialize {
                name: name.clone(),
                source,
            })?;
            self.emit(ProgressEvent::CopyComplete {
                name: name.clone(),
                index: index + 1,
                total,
                duration: copy_start.elapsed(),
            });

            let build_start = Instant::now();
            let build = build_info_code(fs, self.runner.as_ref(), &dest, &self.settings).map_err(
                |source| PipelineError::Build {
                    name: name.clone(),
                    source,
                },
            )?;
            self.emit(ProgressEvent::BuildComplete {
                name: name.clone(),
                attempted: build.attempted(),
                success: !build.is_failure(),
                duration: build_start.elapsed(),
            });

            processed.push(ProcessedInfo {
                name: name.clone(),
                source: src.clone(),
                destination: dest,
                build,
            });
        }

        let metadata_path = target_root.join(&self.settings.metadata_file_name);
        let metadata =
            write_metadata(fs, &metadata_path, &names).map_err(PipelineError::Metadata)?;
        self.emit(ProgressEvent::MetadataWritten {
            path: metadata_path.display().to_string(),
            entries: metadata.number_of_infos,
        });

        let report = RunReport {
            source_root,
            target_root,
            metadata_path,
            processed,
        };

        info!(
            processed = report.processed.len(),
            failed_builds = report.failed_builds(),
            "Pipeline complete"
        );
        self.emit(ProgressEvent::Completed {
            processed: report.processed.len(),
            failed_builds: report.failed_builds(),
            total_time: start.elapsed(),
        });

        Ok(report)
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }
}

/// Rejects names that would resolve to the target root, its parent or the
/// metadata file, and warns when two directories collapse onto the same name
/// (the later copy replaces the earlier one).
fn check_names(
    paths: &[PathBuf],
    names: &[String],
    metadata_file_name: &str,
) -> Result<(), PipelineError> {
    let mut seen = HashSet::new();
    for (path, name) in paths.iter().zip(names) {
        if name.is_empty() || name == "." || name == ".." {
            return Err(PipelineError::EmptyDerivedName(path.clone()));
        }
        if name == metadata_file_name {
            return Err(PipelineError::ReservedDerivedName {
                path: path.clone(),
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            warn!(name = %name, source = %path.display(), "Derived name collides with an earlier directory");
        }
    }
    Ok(())
}

/// Rejects any pair whose destination is the source directory itself or is
/// nested with it in either direction. Replacing such a destination would
/// delete the source before it is copied.
fn check_overlap(
    fs: &dyn FileSystem,
    paths: &[PathBuf],
    names: &[String],
    target_root: &Path,
) -> Result<(), PipelineError> {
    let target = resolve_path(fs, target_root);
    for (path, name) in paths.iter().zip(names) {
        let src = fs.canonicalize(path).unwrap_or_else(|_| path.clone());
        let dest = target.join(name);
        if dest.starts_with(&src) || src.starts_with(&dest) {
            return Err(PipelineError::OverlappingPaths {
                info_dir: path.clone(),
                destination: target_root.join(name),
            });
        }
    }
    Ok(())
}

/// Canonical form of `path`. A path that does not exist yet is resolved
/// through its parent; failing that it is returned unchanged.
fn resolve_path(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    if let Ok(resolved) = fs.canonicalize(path) {
        return resolved;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => fs
            .canonicalize(parent)
            .map(|p| p.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}
