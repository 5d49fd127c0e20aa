//! Common test utilities for integration tests.
//!
//! This module provides a scratch-directory fixture for building files and
//! symlink chains, and helpers for running an inspector whose output is
//! captured in memory.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use linkstat::{Console, InspectOptions, InspectStats, Inspector};

/// A temporary directory in which files and symlinks are created.
pub struct LinkFixture {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl LinkFixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates a regular file with `contents` and returns its absolute path.
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Creates a directory and returns its absolute path.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Creates a symlink `name` whose target text is `target`, verbatim.
    pub fn link(&self, name: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.path().join(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Builds `link1 -> <file>`, `link2 -> link1`, ... `link<n> -> link<n-1>`
    /// using relative targets, and returns the path of the outermost link.
    pub fn chain(&self, file: &str, n: usize) -> PathBuf {
        assert!(n > 0, "a chain needs at least one link");
        self.file(file, b"end of chain");
        let mut previous = file.to_string();
        let mut outer = PathBuf::new();
        for i in 1..=n {
            let name = format!("link{i}");
            outer = self.link(&name, &previous);
            previous = name;
        }
        outer
    }
}

/// Output of one inspection run.
///
/// `stdout` and `stderr` are lossy text views; the raw bytes are kept for
/// checks on names that are not valid UTF-8.
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
    pub raw_stdout: Vec<u8>,
    pub raw_stderr: Vec<u8>,
    pub stats: InspectStats,
}

#[allow(dead_code)]
impl Captured {
    /// Stdout lines.
    pub fn out_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Stderr lines.
    pub fn err_lines(&self) -> Vec<&str> {
        self.stderr.lines().collect()
    }

    /// Stdout lines that are entry type lines (not record attributes).
    pub fn type_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| line.trim_start().contains(": \""))
            .collect()
    }
}

/// Inspects `path` with default options and no base directory at depth 2.
#[allow(dead_code)]
pub fn inspect(path: &Path) -> Captured {
    inspect_with(InspectOptions::default(), |inspector| {
        inspector.inspect(Path::new(""), path, 2).unwrap();
    })
}

/// Runs `f` against a capturing inspector built from `options`.
pub fn inspect_with<F>(options: InspectOptions, f: F) -> Captured
where
    F: FnOnce(&mut Inspector<Vec<u8>, Vec<u8>>),
{
    let mut inspector =
        Inspector::new(Console::new(Vec::new(), Vec::new())).with_options(options);
    f(&mut inspector);
    let stats = *inspector.stats();
    let (out, err) = inspector.into_console().into_inner();
    Captured {
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
        raw_stdout: out,
        raw_stderr: err,
        stats,
    }
}

/// Whether `haystack` contains `needle` as a contiguous run of bytes.
#[allow(dead_code)]
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Number of leading spaces on `line`.
#[allow(dead_code)]
pub fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
