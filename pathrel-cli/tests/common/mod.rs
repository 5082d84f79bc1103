//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a temporary directory with `HOME` pointed at it
//! and the `PATHREL_*` variables cleared, so the developer's own
//! configuration never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the CLI reads from the environment.
const PATHREL_VARS: [&str; 4] = [
    "PATHREL_PLATFORM",
    "PATHREL_CASE_SENSITIVE",
    "PATHREL_DRIVE_LETTERS",
    "PATHREL_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
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

    /// A command with isolated environment and no platform selected.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathrel").expect("Failed to find pathrel binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in PATHREL_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--platform` set.
    pub fn command(&self, platform: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg(platform);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory and return its path.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a command and return trimmed stdout, asserting success.
    pub fn stdout_of(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run pathrel");
        assert!(
            output.status.success(),
            "pathrel failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
