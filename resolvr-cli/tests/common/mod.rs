//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a clean logging environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the resolvr binary.
    ///
    /// `RESOLVR_LOG_MODE` is removed so the caller's environment cannot
    /// change what reaches stderr.
    pub fn command(&self) -> Command {
        command()
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// The OS-canonical form of a path inside the environment.
    pub fn canonical(&self, path: &Path) -> String {
        resolvr::path::canonicalize::canonicalize(path)
            .expect("Failed to canonicalize test path")
            .to_str()
            .expect("Test path is not UTF-8")
            .to_string()
    }
}

/// A resolvr command with a clean logging environment.
pub fn command() -> Command {
    let mut cmd = Command::cargo_bin("resolvr").expect("Failed to find resolvr binary");
    cmd.env_remove("RESOLVR_LOG_MODE");
    cmd
}

/// Run resolvr with `args` and return its trimmed stdout, asserting success.
#[allow(dead_code)]
pub fn resolve(args: &[&str]) -> String {
    let output = command().args(args).output().expect("Failed to run resolvr");

    assert!(
        output.status.success(),
        "resolvr failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .trim_end_matches('\n')
        .to_string()
}
