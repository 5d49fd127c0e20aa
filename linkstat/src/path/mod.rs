//! Path handling for symlink chains.
//!
//! Symlink targets are plain text. When a target is relative it is first
//! looked up as written (relative to the working directory); the directory
//! of the link that produced it is kept as a base, and a lookup that finds
//! nothing is retried once against that base.
//!
//! # Examples
//!
//! ```
//! use linkstat::path::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new();
//! let base = resolver.link_parent(Path::new("releases/current"), Path::new("v2"));
//! assert_eq!(base, Path::new("releases"));
//! assert_eq!(
//!     resolver.retry_path(&base, Path::new("v2")).unwrap(),
//!     Path::new("releases/v2")
//! );
//! ```

pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::PathResolver;
