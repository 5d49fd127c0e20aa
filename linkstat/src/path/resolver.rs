//! Resolution of symlink targets against the directory of their link.
//!
//! This module provides the `PathResolver` type, which decides the path used
//! for each lookup attempt while a symlink chain is being followed.

use std::path::{Path, PathBuf};

/// Decides which path the next lookup attempt uses.
///
/// A symlink target is first looked up exactly as written. Relative targets
/// remember the directory of the link that produced them; if the first
/// lookup finds nothing, the resolver supplies the single fallback candidate
/// built by joining that directory with the target.
///
/// All methods are pure string/path manipulation and never touch the
/// filesystem.
///
/// # Examples
///
/// ```
/// use linkstat::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new();
///
/// // Relative targets are joined to the link's directory
/// assert_eq!(
///     resolver.resolve(Path::new("./a"), Path::new("b")),
///     Path::new("./a/b")
/// );
///
/// // An empty base leaves the target relative to the working directory
/// assert_eq!(resolver.resolve(Path::new(""), Path::new("b")), Path::new("b"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Create a new path resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolve `target` against `base_dir`.
    ///
    /// Rooted targets are returned unchanged. Relative targets are joined to
    /// `base_dir`; when `base_dir` is empty the result is `target` itself.
    #[must_use]
    pub fn resolve(&self, base_dir: &Path, target: &Path) -> PathBuf {
        if target.has_root() {
            target.to_path_buf()
        } else {
            base_dir.join(target)
        }
    }

    /// The fallback candidate for a lookup of `path` that found nothing.
    ///
    /// Returns `None` when there is no base directory to retry against or
    /// when `path` is rooted, in which case prefixing cannot help.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkstat::path::PathResolver;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(
    ///     resolver.retry_path(Path::new("links"), Path::new("target")),
    ///     Some(PathBuf::from("links/target"))
    /// );
    /// assert_eq!(resolver.retry_path(Path::new(""), Path::new("target")), None);
    /// assert_eq!(resolver.retry_path(Path::new("links"), Path::new("/target")), None);
    /// ```
    #[must_use]
    pub fn retry_path(&self, base_dir: &Path, path: &Path) -> Option<PathBuf> {
        if base_dir.as_os_str().is_empty() || path.has_root() {
            return None;
        }
        Some(self.resolve(base_dir, path))
    }

    /// The base directory to hand to the next hop after reading `target`
    /// from the symlink at `link_path`.
    ///
    /// Relative targets get the link's parent directory; rooted targets and
    /// links without a parent component get an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkstat::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(
    ///     resolver.link_parent(Path::new("./a/link"), Path::new("b")),
    ///     Path::new("./a")
    /// );
    /// assert_eq!(
    ///     resolver.link_parent(Path::new("link"), Path::new("b")),
    ///     Path::new("")
    /// );
    /// assert_eq!(
    ///     resolver.link_parent(Path::new("./a/link"), Path::new("/b")),
    ///     Path::new("")
    /// );
    /// ```
    #[must_use]
    pub fn link_parent(&self, link_path: &Path, target: &Path) -> PathBuf {
        if target.has_root() {
            return PathBuf::new();
        }
        link_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}
