//! Utility functions for CLI operations.

use linkstat::{InspectStats, Logger};

/// Global CLI options shared across the run.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Diagnostic logger built from `--verbose`, `--quiet` and the environment.
    pub logger: Logger,
}

/// One-line summary of a run, logged at verbose level.
pub fn format_summary(paths: usize, stats: &InspectStats) -> String {
    format!(
        "inspected {paths} path(s): {} lookup(s), {} retr{}, {} hop(s), {} record(s), {} error(s), {} warning(s)",
        stats.lookups,
        stats.retries,
        if stats.retries == 1 { "y" } else { "ies" },
        stats.hops,
        stats.records,
        stats.errors,
        stats.warnings,
    )
}
