use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Copies a fixture into `dir` so the written `.json` lands in the temp
/// directory instead of the source tree.
pub fn stage_fixture(dir: &TempDir, file: &str) -> PathBuf {
    let src = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file);
    let dst = dir.path().join(file);
    fs::copy(&src, &dst).unwrap_or_else(|e| panic!("Failed to stage {file}: {e}"));
    dst
}

pub fn read_fixture(file: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {file}: {e}"))
}
