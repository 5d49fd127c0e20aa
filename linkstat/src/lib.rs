#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # linkstat
//!
//! A library for inspecting filesystem entries without following their
//! final symlink, and for de-referencing symlink chains one hop at a time.
//!
//! For every entry the [`Inspector`] prints a type line; symlinks are read
//! and followed (each hop indented two columns further), and the first
//! non-symlink entry gets a full metadata record. Relative link targets are
//! first looked up as given and, when that fails with "not found", retried
//! once against the directory of the link that produced them.
//!
//! ## Core Types
//!
//! - [`Inspector`] and [`InspectStats`]: The recursive inspection engine
//! - [`PathResolver`]: Decides the path used for the next lookup attempt
//! - [`FileKind`] and [`MetadataRecord`]: Classified `lstat` results
//! - [`Error`] and [`OsError`]: Failed system calls with errno and message
//! - [`Logger`] and [`LogLevel`]: Diagnostic logging
//!
//! This crate only supports Unix platforms.
//!
//! ## Examples
//!
//! ```
//! use std::path::Path;
//! use linkstat::PathResolver;
//!
//! let resolver = PathResolver::new();
//! assert_eq!(
//!     resolver.resolve(Path::new("/srv/links"), Path::new("target")),
//!     Path::new("/srv/links/target")
//! );
//! assert_eq!(
//!     resolver.resolve(Path::new("/srv/links"), Path::new("/etc/hosts")),
//!     Path::new("/etc/hosts")
//! );
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod inspect;
pub mod link;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::InspectOptions;
pub use entry::{FileKind, MetadataRecord};
pub use error::{Error, OsError, Result};
pub use inspect::{InspectStats, Inspector};
pub use link::LinkTarget;
pub use logging::{init_logger, LogLevel, Logger};
pub use output::Console;
pub use path::PathResolver;
