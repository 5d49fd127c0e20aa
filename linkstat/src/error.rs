//! Error types for the linkstat library.
//!
//! Inspection failures are never propagated up the symlink recursion; they
//! are rendered into an error line by the frame that hit them. The types
//! here carry everything that line needs: which system call failed, on
//! which path, and the raw OS error code with its message.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a linkstat error.
pub type Result<T> = std::result::Result<T, Error>;

/// An OS error reduced to its numeric code and human-readable message.
///
/// # Examples
///
/// ```
/// use std::io;
/// use linkstat::OsError;
///
/// let err = io::Error::from_raw_os_error(2);
/// let os = OsError::from_io(&err);
/// assert_eq!(os.code(), 2);
/// assert!(!os.message().contains("os error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsError {
    code: i32,
    message: String,
}

impl OsError {
    /// Creates an OS error from a code and message.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Extracts the errno and the platform's error string from an I/O error.
    ///
    /// Errors that did not originate from a system call report code 0 and
    /// their own description.
    #[must_use]
    pub fn from_io(err: &io::Error) -> Self {
        let text = err.to_string();
        match err.raw_os_error() {
            Some(code) => {
                // std renders OS errors as "<strerror> (os error <code>)".
                let suffix = format!(" (os error {code})");
                let message = text.strip_suffix(&suffix).unwrap_or(&text).to_string();
                Self { code, message }
            }
            None => Self {
                code: 0,
                message: text,
            },
        }
    }

    /// The numeric error code (errno).
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The human-readable error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ec={}; {}", self.code, self.message)
    }
}

/// The main error type for the linkstat library.
///
/// The `Display` form is the tail of an inspection error line:
/// `on call to <syscall>(): "<path>"; ec=<code>; <message>`. `Display`
/// shows the path lossily; console output writes its raw bytes instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The no-dereference metadata lookup (`lstat`) failed.
    #[error("on call to lstat(): \"{}\"; {os}", path.display())]
    Lookup {
        /// The path that was looked up.
        path: PathBuf,
        /// The underlying OS error.
        os: OsError,
    },

    /// Reading a symlink's target (`readlink`) failed.
    #[error("on call to readlink(): \"{}\"; {os}", path.display())]
    ReadLink {
        /// The symlink whose target could not be read.
        path: PathBuf,
        /// The underlying OS error.
        os: OsError,
    },
}

impl Error {
    /// Creates a lookup error for `path` from an I/O error.
    #[must_use]
    pub fn lookup(path: &Path, err: &io::Error) -> Self {
        Self::Lookup {
            path: path.to_path_buf(),
            os: OsError::from_io(err),
        }
    }

    /// Creates a link-read error for `path` from an I/O error.
    #[must_use]
    pub fn read_link(path: &Path, err: &io::Error) -> Self {
        Self::ReadLink {
            path: path.to_path_buf(),
            os: OsError::from_io(err),
        }
    }

    /// Name of the system call that failed.
    #[must_use]
    pub fn syscall(&self) -> &'static str {
        match self {
            Self::Lookup { .. } => "lstat",
            Self::ReadLink { .. } => "readlink",
        }
    }

    /// The path the failing call was made on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Lookup { path, .. } | Self::ReadLink { path, .. } => path,
        }
    }

    /// The OS error behind this failure.
    #[must_use]
    pub fn os_error(&self) -> &OsError {
        match self {
            Self::Lookup { os, .. } | Self::ReadLink { os, .. } => os,
        }
    }

    /// Whether the OS reported that the path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        io::Error::from_raw_os_error(self.os_error().code()).kind() == io::ErrorKind::NotFound
    }
}
