//! Console output for inspection results.
//!
//! Type lines and metadata records go to the output sink; error and warning
//! lines go to the error sink. Every line is indented by the depth of the
//! inspection frame that produced it. Paths are written as their raw bytes.
//! Both sinks are generic so tests can capture them in memory.

mod formatters;

use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use crate::entry::{FileKind, MetadataRecord};
use crate::error::Error;
use crate::link::LinkTarget;

pub use formatters::{
    error_line, format_ctime, frame_line, record_lines, truncation_warning, type_line,
    CTIME_FORMAT,
};

/// A pair of output sinks that writes indented inspection lines.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use linkstat::{Console, FileKind};
///
/// let mut console = Console::new(Vec::new(), Vec::new());
/// console.type_line(4, FileKind::Directory, Path::new("/tmp")).unwrap();
/// let (out, err) = console.into_inner();
/// assert_eq!(String::from_utf8(out).unwrap(), "    directory: \"/tmp\"\n");
/// assert!(err.is_empty());
/// ```
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// A console writing to the process's standard output and error.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// Creates a console over the given sinks.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Writes the `"<arg>" ==>>` framing line, unindented.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn frame(&mut self, arg: &Path) -> io::Result<()> {
        Self::indented(&mut self.out, 0, &frame_line(arg))
    }

    /// Writes the type line for an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn type_line(&mut self, depth: usize, kind: FileKind, path: &Path) -> io::Result<()> {
        Self::indented(&mut self.out, depth, &type_line(kind, path))
    }

    /// Writes the attribute lines of a terminal record.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be written.
    pub fn record(&mut self, depth: usize, record: &MetadataRecord) -> io::Result<()> {
        for line in record_lines(record) {
            Self::indented(&mut self.out, depth, line.as_bytes())?;
        }
        Ok(())
    }

    /// Writes an error line to the error sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the error sink cannot be written.
    pub fn error(&mut self, depth: usize, err: &Error) -> io::Result<()> {
        Self::indented(&mut self.err, depth, &error_line(err))
    }

    /// Writes a truncation warning to the error sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the error sink cannot be written.
    pub fn truncation_warning(&mut self, depth: usize, target: &LinkTarget) -> io::Result<()> {
        Self::indented(&mut self.err, depth, &truncation_warning(target))
    }

    /// Flushes both sinks.
    ///
    /// # Errors
    ///
    /// Returns an error if either sink fails to flush.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Consumes the console, returning the output and error sinks.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn indented<W: Write>(sink: &mut W, depth: usize, line: &[u8]) -> io::Result<()> {
        write!(sink, "{:depth$}", "")?;
        sink.write_all(line)?;
        sink.write_all(b"\n")
    }
}
