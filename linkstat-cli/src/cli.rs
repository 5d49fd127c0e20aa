//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.

use crate::commands::InspectCommand;
use clap::Parser;

/// Report lstat metadata for paths, following symlink chains to the end.
#[derive(Parser)]
#[command(name = "linkstat")]
#[command(
    version,
    about = "Report lstat metadata and follow symlink chains",
    long_about = None
)]
pub struct Cli {
    /// Print diagnostics about retries and symlink hops
    #[arg(long)]
    pub verbose: bool,

    /// Suppress diagnostics
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub inspect: InspectCommand,
}
