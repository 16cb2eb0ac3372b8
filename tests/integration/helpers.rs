//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the checked-in test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir and return (dir, path).
///
/// The TempDir must stay alive for the duration of the test; dropping
/// it removes the copied file.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let dest = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("copy fixture");
    (dir, dest)
}
