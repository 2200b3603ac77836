use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[allow(dead_code)]
pub fn get_infopack_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_infopack"))
}

/// Writes `contents` to `root/relative`, creating parent directories
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, contents).expect("Failed to write file");
}

/// Source tree used by most scenarios: one info directory with a Go file and
/// nested data, one unrelated directory
#[allow(dead_code)]
pub fn create_sample_source(root: &Path) -> PathBuf {
    let data = root.join("data");
    write_file(&data, "alpha_info/main.go", "package main\n\nfunc main() {}\n");
    write_file(&data, "alpha_info/assets/config.txt", "alpha config\n");
    write_file(&data, "beta/main.go", "package main\n\nfunc main() {}\n");
    data
}

/// Every file below `root` mapped to its contents, keyed by relative path
#[allow(dead_code)]
pub fn snapshot(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .expect("Entry outside root")
                .to_string_lossy()
                .to_string();
            let contents = fs::read_to_string(e.path()).unwrap_or_default();
            (relative, contents)
        })
        .collect()
}

/// Installs a fake `go` executable in `bin_dir`. `go build x.go` writes an
/// artifact named `x` into the current directory; setting `STUB_GO_EXIT`
/// makes it fail with that code instead.
#[cfg(unix)]
#[allow(dead_code)]
pub fn install_stub_go(bin_dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = r#"#!/bin/sh
if [ "$1" != "build" ]; then
    echo "unexpected subcommand: $1" >&2
    exit 64
fi
if [ -n "$STUB_GO_EXIT" ]; then
    echo "stub failure for $2" >&2
    exit "$STUB_GO_EXIT"
fi
printf 'built from %s\n' "$2" > "${2%.go}"
echo "compiled $2"
"#;

    fs::create_dir_all(bin_dir).expect("Failed to create bin dir");
    let path = bin_dir.join("go");
    fs::write(&path, script).expect("Failed to write stub go");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark stub go executable");
    path
}

/// PATH value with `bin_dir` searched first
#[allow(dead_code)]
pub fn path_with(bin_dir: &Path) -> String {
    match std::env::var("PATH") {
        Ok(existing) if !existing.is_empty() => format!("{}:{}", bin_dir.display(), existing),
        _ => bin_dir.display().to_string(),
    }
}
