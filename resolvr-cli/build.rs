//! Build script for resolvr-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("resolvr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve a path to canonical form")
        .long_about(
            "Returns path resolved to canonical form, with \"..\", \".\" and doubled \
             separators replaced where possible. In the two-argument form the path is \
             resolved relative to relative_path. With -s symlinks are resolved by the \
             operating system, the second argument is ignored, and the target must exist.",
        )
        .override_usage("resolvr [-h] | [-s] path [relative_path]")
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Print this help and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("symlinks")
                .short('s')
                .long("symlinks")
                .help("Resolve symlinks and check paths on the file system")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("path")
                .value_name("path")
                .allow_hyphen_values(true)
                .help("Path to resolve"),
        )
        .arg(
            Arg::new("relative_path")
                .value_name("relative_path")
                .allow_hyphen_values(true)
                .help("Base the path is resolved relative to (ignored with -s)"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("resolvr.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
