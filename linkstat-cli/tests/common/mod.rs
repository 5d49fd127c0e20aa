//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Fixture helpers for files, directories, symlinks and FIFOs
//! - Output helpers for checking indentation

use assert_cmd::Command;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Commands run with the temporary directory as their working directory,
/// so relative link targets resolve the same way on every machine.
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

    /// Get a command builder running in the temporary directory.
    ///
    /// `LINKSTAT_LOG_MODE` is cleared so the caller's environment cannot
    /// change diagnostic output.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("linkstat").expect("Failed to find linkstat binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("LINKSTAT_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a regular file (and its parent directories).
    pub fn create_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_path.join(name);
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

    /// Create a symlink `name` whose target text is `target`, verbatim.
    pub fn symlink(&self, name: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.temp_path.join(name);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Create a named pipe.
    pub fn mkfifo(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        let c_path = CString::new(path.as_os_str().as_bytes()).expect("Path contains NUL");
        let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o644) };
        assert_eq!(rc, 0, "mkfifo failed: {}", std::io::Error::last_os_error());
        path
    }
}

/// Run output split into lines.
pub fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .expect("Invalid UTF-8 in output")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Number of leading spaces on `line`.
#[allow(dead_code)]
pub fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
