//! Build script for linkstat-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("linkstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report lstat metadata and follow symlink chains")
        .long_about(
            "Report the type and raw lstat metadata of each path. Symbolic links are \
             followed one hop at a time, each hop indented two columns further, until \
             a non-symlink entry or an error is reached. Relative link targets that are \
             not found are retried once against the directory of the link.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Print diagnostics about retries and symlink hops")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress diagnostics")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .help("Paths to inspect, processed in order")
                .num_args(0..)
                .action(clap::ArgAction::Append),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("linkstat.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
