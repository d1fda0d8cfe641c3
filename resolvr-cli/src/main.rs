//! Main entry point for the resolvr CLI.
//!
//! Resolves a path to canonical form and prints it:
//! - `resolvr path [relative_path]`: string manipulation only
//! - `resolvr -s path`: follow symlinks through the operating system

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;
use commands::ResolveCommand;
use error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = resolvr::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        logger.debug("A global logger was already installed");
    }

    if cli.help {
        eprintln!("{}", cli::long_help());
        std::process::exit(0);
    }

    // Execute the command
    let result = ResolveCommand::from_cli(&cli).execute(&logger);

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, CliError::InvalidArguments(_)) {
                eprintln!("{}", cli::short_usage());
            }
            std::process::exit(e.exit_code());
        }
    }
}
