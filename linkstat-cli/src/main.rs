//! Main entry point for the linkstat CLI.
//!
//! Each path argument is framed with `"<path>" ==>>` and inspected with
//! `lstat`; symlinks are followed hop by hop until a non-symlink entry or
//! an error is reached.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = linkstat::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions { logger };

    // Per-path failures are printed as they happen and never change the exit status
    match cli.inspect.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e @ CliError::Usage) => {
            println!("{e}");
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
