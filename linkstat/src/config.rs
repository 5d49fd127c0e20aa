//! Inspection options.
//!
//! The defaults reproduce the classic output layout: top-level entries are
//! indented two columns, every symlink hop adds two more, and link targets
//! are read into a 2048-byte buffer (2047 bytes of payload).

use crate::link::DEFAULT_LINK_BUFFER_SIZE;

/// Indentation of a top-level entry.
pub const DEFAULT_INITIAL_DEPTH: usize = 2;

/// Indentation added per symlink hop.
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Smallest accepted link buffer: one payload byte plus the terminator slot.
const MIN_LINK_BUFFER_SIZE: usize = 2;

/// Options controlling how an [`Inspector`](crate::Inspector) lays out output
/// and reads link targets.
///
/// # Examples
///
/// ```
/// use linkstat::InspectOptions;
///
/// let options = InspectOptions::new()
///     .with_initial_depth(0)
///     .with_link_buffer_size(64);
/// assert_eq!(options.initial_depth(), 0);
/// assert_eq!(options.indent_step(), 2);
/// assert_eq!(options.link_capacity(), 63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    initial_depth: usize,
    indent_step: usize,
    link_buffer_size: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            initial_depth: DEFAULT_INITIAL_DEPTH,
            indent_step: DEFAULT_INDENT_STEP,
            link_buffer_size: DEFAULT_LINK_BUFFER_SIZE,
        }
    }
}

impl InspectOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation used for top-level entries.
    #[must_use]
    pub fn with_initial_depth(mut self, depth: usize) -> Self {
        self.initial_depth = depth;
        self
    }

    /// Set the indentation added for each symlink hop.
    ///
    /// A step of zero is raised to one so that depth strictly increases.
    #[must_use]
    pub fn with_indent_step(mut self, step: usize) -> Self {
        self.indent_step = step.max(1);
        self
    }

    /// Set the size of the link-target buffer, terminator slot included.
    ///
    /// Sizes below 2 are raised to 2.
    #[must_use]
    pub fn with_link_buffer_size(mut self, size: usize) -> Self {
        self.link_buffer_size = size.max(MIN_LINK_BUFFER_SIZE);
        self
    }

    /// Indentation of a top-level entry.
    #[must_use]
    pub fn initial_depth(&self) -> usize {
        self.initial_depth
    }

    /// Indentation added per hop.
    #[must_use]
    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    /// Size of the link-target buffer, terminator slot included.
    #[must_use]
    pub fn link_buffer_size(&self) -> usize {
        self.link_buffer_size
    }

    /// Maximum number of link-target bytes that can be read.
    #[must_use]
    pub fn link_capacity(&self) -> usize {
        self.link_buffer_size - 1
    }
}
