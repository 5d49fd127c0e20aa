//! The recursive inspector.
//!
//! [`Inspector::inspect`] looks an entry up without following a final
//! symlink, prints its type line and then either follows the link one hop
//! further (two columns deeper) or prints the full metadata record. The
//! recursion ends at the first non-symlink entry or at the first failure.
//! A failure is printed by the frame that hit it and never propagates to
//! the caller, so one broken argument does not affect the others.
//!
//! There is no cycle detection here: a symlink loop ends when the operating
//! system refuses the lookup with "too many levels of symbolic links".

use std::fs::{self, Metadata};
use std::io::{self, Stderr, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::config::InspectOptions;
use crate::entry::{FileKind, MetadataRecord};
use crate::error::{Error, Result};
use crate::link;
use crate::logging::Logger;
use crate::output::Console;
use crate::path::PathResolver;

/// Counters describing what an [`Inspector`] has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectStats {
    /// Number of `inspect` calls, recursive hops included.
    pub calls: usize,
    /// Number of `lstat` attempts.
    pub lookups: usize,
    /// Number of base-directory retries after a "not found" lookup.
    pub retries: usize,
    /// Number of symlinks followed.
    pub hops: usize,
    /// Number of terminal metadata records printed.
    pub records: usize,
    /// Number of error lines printed.
    pub errors: usize,
    /// Number of truncation warnings printed.
    pub warnings: usize,
}

/// Inspects filesystem entries and follows symlink chains.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use linkstat::Inspector;
///
/// let mut inspector = Inspector::stdio();
/// inspector.inspect_argument(Path::new("/usr/bin/cc")).unwrap();
/// ```
///
/// Output can be captured by supplying in-memory sinks:
///
/// ```
/// use std::path::Path;
/// use linkstat::{Console, Inspector};
///
/// let mut inspector = Inspector::new(Console::new(Vec::new(), Vec::new()));
/// inspector.inspect_argument(Path::new("/definitely/not/here")).unwrap();
/// assert_eq!(inspector.stats().errors, 1);
///
/// let (out, err) = inspector.into_console().into_inner();
/// assert_eq!(String::from_utf8(out).unwrap(), "\"/definitely/not/here\" ==>>\n");
/// assert!(String::from_utf8(err).unwrap().contains("on call to lstat()"));
/// ```
#[derive(Debug)]
pub struct Inspector<O, E> {
    console: Console<O, E>,
    resolver: PathResolver,
    options: InspectOptions,
    logger: Logger,
    stats: InspectStats,
}

impl Inspector<Stdout, Stderr> {
    /// An inspector printing to standard output and standard error.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Console::stdio())
    }
}

impl<O: Write, E: Write> Inspector<O, E> {
    /// Creates an inspector with default options over `console`.
    pub fn new(console: Console<O, E>) -> Self {
        Self {
            console,
            resolver: PathResolver::new(),
            options: InspectOptions::default(),
            logger: Logger::default(),
            stats: InspectStats::default(),
        }
    }

    /// Replace the inspection options.
    #[must_use]
    pub fn with_options(mut self, options: InspectOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the diagnostic logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> &InspectStats {
        &self.stats
    }

    /// Flushes the console's sinks.
    ///
    /// # Errors
    ///
    /// Returns an error if either sink fails to flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.console.flush()
    }

    /// Consumes the inspector, returning its console.
    pub fn into_console(self) -> Console<O, E> {
        self.console
    }

    /// Frames and inspects one top-level argument.
    ///
    /// Prints `"<arg>" ==>>` and then inspects `arg` with no base directory
    /// at the initial depth.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output sinks cannot be written;
    /// inspection failures are printed, not returned.
    pub fn inspect_argument(&mut self, arg: &Path) -> io::Result<()> {
        self.console.frame(arg)?;
        let depth = self.options.initial_depth();
        self.inspect(Path::new(""), arg, depth)
    }

    /// Inspects `path`, following symlinks until a non-symlink or a failure.
    ///
    /// `base_dir` is the directory of the link that produced `path` (empty
    /// for top-level arguments); it is used only for the single retry after
    /// a "not found" lookup. `depth` is the indentation of this frame.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output sinks cannot be written;
    /// inspection failures are printed, not returned.
    pub fn inspect(&mut self, base_dir: &Path, path: &Path, depth: usize) -> io::Result<()> {
        self.stats.calls += 1;

        let (path, metadata) = match self.lookup(base_dir, path) {
            Ok(found) => found,
            Err(err) => return self.report(depth, &err),
        };

        let kind = FileKind::from_file_type(metadata.file_type());
        self.console.type_line(depth, kind, &path)?;

        if kind.is_symlink() {
            return self.follow(&path, depth);
        }

        self.stats.records += 1;
        self.console
            .record(depth, &MetadataRecord::from_metadata(&metadata))
    }

    /// Looks `path` up without following a final symlink, retrying once
    /// against `base_dir` when the first attempt finds nothing.
    ///
    /// Returns the path that succeeded alongside its metadata.
    fn lookup(&mut self, base_dir: &Path, path: &Path) -> Result<(PathBuf, Metadata)> {
        self.stats.lookups += 1;
        let err = match fs::symlink_metadata(path) {
            Ok(metadata) => return Ok((path.to_path_buf(), metadata)),
            Err(err) => err,
        };

        if err.kind() != io::ErrorKind::NotFound {
            return Err(Error::lookup(path, &err));
        }
        let Some(retry) = self.resolver.retry_path(base_dir, path) else {
            return Err(Error::lookup(path, &err));
        };

        self.logger.debug(&format!(
            "\"{}\" not found, retrying as \"{}\"",
            path.display(),
            retry.display()
        ));
        self.stats.lookups += 1;
        self.stats.retries += 1;
        match fs::symlink_metadata(&retry) {
            Ok(metadata) => Ok((retry, metadata)),
            Err(err) => Err(Error::lookup(&retry, &err)),
        }
    }

    /// Reads the target of the symlink at `path` and inspects it one hop deeper.
    fn follow(&mut self, path: &Path, depth: usize) -> io::Result<()> {
        let target = match link::read_link_bounded(path, self.options.link_buffer_size()) {
            Ok(target) => target,
            Err(err) => return self.report(depth, &Error::read_link(path, &err)),
        };

        if target.is_truncated() {
            self.stats.warnings += 1;
            self.console.truncation_warning(depth, &target)?;
        }

        let base_dir = self.resolver.link_parent(path, target.as_path());
        self.logger.debug(&format!(
            "\"{}\" -> \"{}\"",
            path.display(),
            target.as_path().display()
        ));

        self.stats.hops += 1;
        self.inspect(&base_dir, target.as_path(), depth + self.options.indent_step())
    }

    fn report(&mut self, depth: usize, err: &Error) -> io::Result<()> {
        self.stats.errors += 1;
        self.console.error(depth, err)
    }
}
