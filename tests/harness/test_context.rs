//! Shared testing harness for `coverletter` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI's working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a file relative to the working directory, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the working directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Build a command for invoking the compiled binary in the working
    /// directory, with no inherited API key.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("coverletter").expect("Failed to locate coverletter binary");
        cmd.current_dir(&self.work_dir).env_remove("GOOGLE_API_KEY").env("RUST_LOG", "off");
        cmd
    }
}
