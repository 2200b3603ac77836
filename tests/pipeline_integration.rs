//! Library-level pipeline tests against a real directory tree

mod support;

use infopack::config::PipelineSettings;
use infopack::pipeline::phases::metadata::read_metadata;
use infopack::{BuildOutcome, MockCommandRunner, Orchestrator, PipelineError, RealFileSystem};
use std::path::Path;
use std::sync::Arc;
use support::{create_sample_source, snapshot, write_file};
use tempfile::TempDir;

fn orchestrator(runner: Arc<MockCommandRunner>) -> Orchestrator {
    Orchestrator::new(
        Arc::new(RealFileSystem::new()),
        runner,
        PipelineSettings::default(),
    )
}

#[test]
fn test_pairs_every_match_with_one_copy() {
    let temp = TempDir::new().unwrap();
    create_sample_source(temp.path());
    write_file(temp.path(), "data/DELTA_Info/readme.md", "# delta");
    write_file(temp.path(), "data/epsilon_info_v2/a.go", "package main");
    write_file(temp.path(), "data/loose_info.go", "package main");
    let runner = Arc::new(MockCommandRunner::succeeding());

    let report = orchestrator(runner.clone())
        .run_from(temp.path(), Path::new("data"), Path::new("out"))
        .unwrap();

    let mut names = report.names();
    names.sort();
    assert_eq!(names, vec!["DELTA_Info", "alpha", "epsilon_v2"]);

    for item in &report.processed {
        assert!(item.destination.is_dir());
        assert_eq!(item.destination, temp.path().join("out").join(&item.name));
    }

    let metadata = read_metadata(&RealFileSystem::new(), &report.metadata_path).unwrap();
    assert_eq!(metadata.number_of_infos, 3);
    assert_eq!(metadata.info_names, report.names());

    let mut working_dirs: Vec<_> = runner
        .invocations()
        .into_iter()
        .map(|spec| spec.working_dir)
        .collect();
    working_dirs.sort();
    assert_eq!(
        working_dirs,
        vec![
            temp.path().join("out/alpha"),
            temp.path().join("out/epsilon_v2"),
        ]
    );

    let delta = report
        .processed
        .iter()
        .find(|p| p.name == "DELTA_Info")
        .unwrap();
    assert_eq!(delta.build, BuildOutcome::Skipped);
}

#[test]
fn test_source_left_untouched() {
    let temp = TempDir::new().unwrap();
    let data = create_sample_source(temp.path());
    let before = snapshot(&data);

    orchestrator(Arc::new(MockCommandRunner::succeeding()))
        .run_from(temp.path(), Path::new("data"), Path::new("out"))
        .unwrap();

    assert_eq!(snapshot(&data), before);
}

#[test]
fn test_absolute_paths_ignore_base() {
    let temp = TempDir::new().unwrap();
    let data = create_sample_source(temp.path());
    let out = temp.path().join("elsewhere");

    let report = orchestrator(Arc::new(MockCommandRunner::succeeding()))
        .run_from(Path::new("/nonexistent-base"), &data, &out)
        .unwrap();

    assert_eq!(report.target_root, out);
    assert!(out.join("alpha/main.go").is_file());
}

#[test]
fn test_source_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "data", "not a directory");

    let err = orchestrator(Arc::new(MockCommandRunner::succeeding()))
        .run_from(temp.path(), Path::new("data"), Path::new("out"))
        .unwrap_err();

    assert!(matches!(err, PipelineError::SourceNotDirectory(_)));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_target_equal_to_source_preserves_source() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "data/ALPHA_INFO/main.go", "package main\n");
    let before = snapshot(&temp.path().join("data"));
    let runner = Arc::new(MockCommandRunner::succeeding());

    let err = orchestrator(runner.clone())
        .run_from(temp.path(), Path::new("data"), Path::new("data"))
        .unwrap_err();

    assert!(matches!(err, PipelineError::OverlappingPaths { .. }));
    assert_eq!(snapshot(&temp.path().join("data")), before);
    assert!(runner.invocations().is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_directory_name_is_copied() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let raw = OsStr::from_bytes(b"caf\xe9_info");
    let info_dir = temp.path().join("data").join(raw);
    std::fs::create_dir_all(&info_dir).unwrap();
    std::fs::write(info_dir.join("x.txt"), "payload").unwrap();

    let report = orchestrator(Arc::new(MockCommandRunner::succeeding()))
        .run_from(temp.path(), Path::new("data"), Path::new("out"))
        .unwrap();

    assert_eq!(report.processed.len(), 1);
    let copied = &report.processed[0].destination;
    assert_eq!(
        std::fs::read_to_string(copied.join("x.txt")).unwrap(),
        "payload"
    );
    assert!(temp.path().join("out/metadata.json").is_file());
}
