//! CLI-specific error types with exit codes.
//!
//! Per-path inspection failures are not errors at this level; they are
//! printed by the inspector and the run still succeeds. What remains is
//! the usage failure and failure to write the output itself.

use std::fmt;

/// Message printed when no paths are given.
pub const USAGE_MESSAGE: &str = "Expect one or more filepath arguments";

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// No path arguments were given.
    Usage,

    /// Writing to standard output or standard error failed.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error), even if some paths failed to resolve
    /// - 1: No path arguments
    /// - 5: I/O error on the output streams
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => 1,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "{USAGE_MESSAGE}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Usage => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
