//! CLI structure and help text.
//!
//! This module defines the CLI using clap's derive macros. clap's built-in
//! help flag is replaced by our own `-h`, which prints the long help to
//! standard error instead of standard output.

use clap::{CommandFactory, Parser};
use resolvr::{ResolutionMode, ResolveConfig};

/// Short usage line shown on argument errors.
pub const USAGE: &str = "resolvr [-h] | [-s] path [relative_path]";

const LONG_ABOUT: &str = "\
Returns path resolved to canonical form, that is with \"..\", \".\" and
doubled separators replaced where possible so as to form the simplest
result that still specifies the same path.

In the two-argument form, returns the path in the first argument resolved
as relative to the relative_path in the second argument.

If the path could be resolved resolvr exits successfully and outputs the
resolved path, otherwise it exits with a failure status.";

const AFTER_LONG_HELP: &str = "\
PLATFORMS:
    If -s is specified then symlinks are resolved to their targets, and
    resolvr fails if the target path does not exist. With -s the second
    argument is ignored and the current directory is the base for any
    relative path.

    On Windows \"\\\" is the path separator and a leading drive such as
    \"C:\" is kept as is; on all other platforms the separator is \"/\".

PATH RESOLUTION:
    Without -s this program only does string manipulation and never looks
    at the file system, so a leading \"..\" on a relative path is dropped.

    With -s resolution is done by the operating system, as per the
    realpath C library function:

      http://pubs.opengroup.org/onlinepubs/9699919799/functions/realpath.html

ENVIRONMENT:
    RESOLVR_LOG_MODE    quiet, normal or verbose; overridden by --quiet
                        and --verbose";

/// Resolve a path to canonical form.
#[derive(Parser, Debug)]
#[command(name = "resolvr")]
#[command(
    version,
    about = "Resolve a path to canonical form",
    long_about = LONG_ABOUT,
    after_long_help = AFTER_LONG_HELP,
    override_usage = USAGE,
    disable_help_flag = true
)]
pub struct Cli {
    /// Print this help and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Resolve symlinks and check paths on the file system
    #[arg(short = 's', long = "symlinks")]
    pub symlinks: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Path to resolve
    #[arg(value_name = "path", allow_hyphen_values = true)]
    pub path: Option<String>,

    /// Base the path is resolved relative to (ignored with -s)
    #[arg(value_name = "relative_path", allow_hyphen_values = true)]
    pub relative_path: Option<String>,

    /// Extra arguments, ignored with a warning
    #[arg(value_name = "extra", hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// The non-empty positional arguments, in order.
    ///
    /// Empty arguments are skipped, so `resolvr "" a` treats `a` as the path.
    pub fn positionals(&self) -> Vec<&str> {
        self.path
            .iter()
            .chain(self.relative_path.iter())
            .chain(self.extra.iter())
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
            .collect()
    }

    /// Positional arguments beyond the path and its base.
    pub fn extra_arguments(&self) -> Vec<&str> {
        self.positionals().into_iter().skip(2).collect()
    }

    /// Build the resolution config, or `None` when no path was given.
    pub fn to_config(&self) -> Option<ResolveConfig> {
        let positionals = self.positionals();
        let path = positionals.first()?;

        let mode = if self.symlinks {
            ResolutionMode::Symlinks
        } else {
            ResolutionMode::Lexical
        };

        let mut config = ResolveConfig::new(*path).with_mode(mode);
        if let Some(base) = positionals.get(1) {
            config = config.with_base(*base);
        }
        Some(config)
    }
}

/// Render the short usage line.
pub fn short_usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Render the long help text.
pub fn long_help() -> String {
    Cli::command().render_long_help().to_string()
}
