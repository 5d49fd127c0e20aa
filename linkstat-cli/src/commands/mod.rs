//! CLI command implementations.
//!
//! - `inspect`: Frame and inspect each path argument

pub mod inspect;

pub use inspect::InspectCommand;
