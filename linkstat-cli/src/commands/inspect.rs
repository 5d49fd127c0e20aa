//! Command to inspect each path argument.

use crate::error::CliError;
use crate::utils::{format_summary, GlobalOptions};
use clap::Args;
use linkstat::Inspector;
use std::path::PathBuf;

/// Inspect filesystem entries, following symlinks to their final target.
#[derive(Args)]
pub struct InspectCommand {
    /// Paths to inspect, processed in order
    ///
    /// Names starting with `-` are taken as paths unless they are a known
    /// flag given before the first path.
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.paths.is_empty() {
            return Err(CliError::Usage);
        }

        let mut inspector = Inspector::stdio().with_logger(global.logger);
        for path in &self.paths {
            inspector.inspect_argument(path)?;
        }
        inspector.flush()?;

        global
            .logger
            .info(&format_summary(self.paths.len(), inspector.stats()));
        Ok(())
    }
}
