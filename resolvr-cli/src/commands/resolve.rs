//! Command to resolve a path and print it.

use std::io::Write;

use crate::cli::{short_usage, Cli};
use crate::error::CliError;
use resolvr::{Logger, PathResolver, ResolveConfig};

/// Resolve one path, lexically or through the operating system.
#[derive(Debug)]
pub struct ResolveCommand {
    /// What to resolve; `None` when no path was given.
    pub config: Option<ResolveConfig>,

    /// Positional arguments beyond the path and its base.
    pub extra: Vec<String>,
}

impl ResolveCommand {
    /// Capture the resolution request from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.to_config(),
            extra: cli.extra_arguments().into_iter().map(String::from).collect(),
        }
    }

    /// Resolve and print the result to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if no path was given, the path cannot be resolved,
    /// or the result cannot be written.
    pub fn execute(self, logger: &Logger) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        self.execute_to(&mut stdout.lock(), logger)
    }

    /// Resolve and write the result line to `out`.
    ///
    /// The `resolving "<path>"` diagnostic always goes to standard error,
    /// before resolution is attempted.
    pub fn execute_to<W: Write>(self, out: &mut W, logger: &Logger) -> Result<(), CliError> {
        if !self.extra.is_empty() {
            logger.warn(&format!(
                "Ignoring extra arguments {:?}.  (Do you need to quote or escape spaces?)\n{}",
                self.extra,
                short_usage()
            ));
        }

        let config = self.config.ok_or_else(|| {
            CliError::InvalidArguments("missing required argument <path>".to_string())
        })?;

        let resolver = PathResolver::new();
        logger.info(&format!("Resolving in {} mode", config.mode()));

        let assembled = resolver.assemble(&config);
        eprintln!("resolving \"{}\"", assembled.subject());

        let resolved = resolver.finish(assembled)?;
        writeln!(out, "{resolved}")?;
        Ok(())
    }
}
