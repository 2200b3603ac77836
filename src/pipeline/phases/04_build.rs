use crate::config::PipelineSettings;
use crate::fs::FileSystem;
use crate::pipeline::report::BuildOutcome;
use crate::process::{CommandRunner, CommandSpec};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// First file directly inside `dir` whose name ends with `extension`
/// (case-sensitive). Subdirectories are not searched.
pub fn find_code_file(fs: &dyn FileSystem, dir: &Path, extension: &str) -> Result<Option<String>> {
    let entries = fs
        .read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    Ok(entries
        .into_iter()
        .find(|e| e.is_file() && e.file_name().ends_with(extension))
        .map(|e| e.name))
}

/// Runs the compile command on the first code file in `dir`, with `dir` as
/// the working directory of the spawned process. Build failures are returned
/// as an outcome; only failing to list `dir` is an error.
pub fn build_info_code(
    fs: &dyn FileSystem,
    runner: &dyn CommandRunner,
    dir: &Path,
    settings: &PipelineSettings,
) -> Result<BuildOutcome> {
    let Some(file) = find_code_file(fs, dir, &settings.code_extension)? else {
        debug!(dir = %dir.display(), "No {} file found, skipping build", settings.code_extension);
        return Ok(BuildOutcome::Skipped);
    };

    let spec = CommandSpec::new(&settings.compile_program, dir)
        .args(settings.compile_args.iter().cloned())
        .arg(file.clone());
    info!(command = %spec, cwd = %dir.display(), "Compiling");

    let outcome = match runner.run(&spec) {
        Ok(output) if output.success => BuildOutcome::Succeeded {
            file,
            stdout: output.stdout,
            stderr: output.stderr,
        },
        Ok(output) => {
            warn!(
                file = %file,
                exit_code = ?output.exit_code,
                stderr = %output.stderr.trim(),
                "Compile command failed"
            );
            BuildOutcome::Failed {
                file,
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            }
        }
        Err(e) => {
            warn!(file = %file, error = %e, "Compile command could not be started");
            BuildOutcome::SpawnFailed {
                file,
                error: format!("{:#}", e),
            }
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::process::MockCommandRunner;
    use std::path::PathBuf;

    #[test]
    fn test_find_code_file_first_match() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/README.md", "# alpha");
        fs.add_file("out/alpha/a.go", "package main");
        fs.add_file("out/alpha/b.go", "package main");

        let file = find_code_file(&fs, Path::new("/mock/out/alpha"), ".go").unwrap();
        assert_eq!(file.as_deref(), Some("a.go"));
    }

    #[test]
    fn test_find_code_file_is_case_sensitive_and_shallow() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/MAIN.GO", "package main");
        fs.add_file("out/alpha/cmd/main.go", "package main");
        fs.add_dir("out/alpha/pkg.go");

        let file = find_code_file(&fs, Path::new("/mock/out/alpha"), ".go").unwrap();
        assert_eq!(file, None);
    }

    #[test]
    fn test_no_code_file_runs_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/notes.txt", "nothing to build");
        let runner = MockCommandRunner::succeeding();

        let outcome = build_info_code(
            &fs,
            &runner,
            Path::new("/mock/out/alpha"),
            &PipelineSettings::default(),
        )
        .unwrap();

        assert_eq!(outcome, BuildOutcome::Skipped);
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_invokes_go_build_in_directory() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/main.go", "package main");
        let runner = MockCommandRunner::succeeding();

        let outcome = build_info_code(
            &fs,
            &runner,
            Path::new("/mock/out/alpha"),
            &PipelineSettings::default(),
        )
        .unwrap();

        assert!(matches!(outcome, BuildOutcome::Succeeded { ref file, .. } if file == "main.go"));
        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, "go");
        assert_eq!(invocations[0].args, vec!["build", "main.go"]);
        assert_eq!(invocations[0].working_dir, PathBuf::from("/mock/out/alpha"));
    }

    #[test]
    fn test_failed_build_is_an_outcome() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/main.go", "package main");
        let runner = MockCommandRunner::failing(1, "undefined: foo");

        let outcome = build_info_code(
            &fs,
            &runner,
            Path::new("/mock/out/alpha"),
            &PipelineSettings::default(),
        )
        .unwrap();

        match outcome {
            BuildOutcome::Failed {
                file,
                exit_code,
                stderr,
                ..
            } => {
                assert_eq!(file, "main.go");
                assert_eq!(exit_code, Some(1));
                assert_eq!(stderr, "undefined: foo");
            }
            other => panic!("expected failed build, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_compiler_is_an_outcome() {
        let fs = MockFileSystem::new();
        fs.add_file("out/alpha/main.go", "package main");
        let runner = MockCommandRunner::unavailable();

        let outcome = build_info_code(
            &fs,
            &runner,
            Path::new("/mock/out/alpha"),
            &PipelineSettings::default(),
        )
        .unwrap();

        assert!(matches!(outcome, BuildOutcome::SpawnFailed { .. }));
    }

    #[test]
    fn test_unreadable_directory_is_error() {
        let fs = MockFileSystem::new();
        let runner = MockCommandRunner::succeeding();

        let result = build_info_code(
            &fs,
            &runner,
            Path::new("/mock/out/missing"),
            &PipelineSettings::default(),
        );
        assert!(result.is_err());
    }
}
