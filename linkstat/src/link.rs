//! Bounded reads of symlink targets.
//!
//! A link target is read into a fixed-capacity buffer that keeps one slot
//! free for a terminator, the way `readlink(2)` is traditionally called.
//! When the target fills the payload capacity exactly it may have been cut
//! short, and the result is flagged as truncated.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

/// Default link buffer size in bytes, terminator slot included.
pub const DEFAULT_LINK_BUFFER_SIZE: usize = 2048;

/// The raw target text of a symlink.
///
/// Owned by the inspection frame that read it and dropped once the next hop
/// has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    bytes: Vec<u8>,
    truncated: bool,
}

impl LinkTarget {
    /// Builds a target from raw bytes, keeping at most `capacity` of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkstat::LinkTarget;
    ///
    /// let target = LinkTarget::from_bytes(b"../lib".to_vec(), 4);
    /// assert_eq!(target.as_bytes(), b"../l");
    /// assert!(target.is_truncated());
    ///
    /// let target = LinkTarget::from_bytes(b"../lib".to_vec(), 16);
    /// assert!(!target.is_truncated());
    /// ```
    #[must_use]
    pub fn from_bytes(mut bytes: Vec<u8>, capacity: usize) -> Self {
        let truncated = bytes.len() >= capacity;
        if bytes.len() > capacity {
            log::debug!(
                "link target of {} bytes cut to {capacity} bytes",
                bytes.len()
            );
            bytes.truncate(capacity);
        }
        Self { bytes, truncated }
    }

    /// The target as a path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(OsStr::from_bytes(&self.bytes))
    }

    /// The raw target bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the link target is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the payload filled the buffer, so the target may be cut short.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consumes the target, returning it as an owned path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(OsString::from_vec(self.bytes))
    }
}

/// Reads the target of the symlink at `path` into a buffer of `buffer_size`
/// bytes, one of which is reserved for the terminator.
///
/// # Errors
///
/// Returns the I/O error from `readlink` if the path is not a symlink or
/// cannot be read.
pub fn read_link_bounded(path: &Path, buffer_size: usize) -> io::Result<LinkTarget> {
    let capacity = buffer_size.saturating_sub(1);
    let target = fs::read_link(path)?;
    Ok(LinkTarget::from_bytes(
        target.into_os_string().into_vec(),
        capacity,
    ))
}
