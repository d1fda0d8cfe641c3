//! Library exports for resolvr-cli.
//!
//! This module exports the CLI structure so the argument handling can be
//! tested without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;

// Re-export CLI for tests
pub use cli::Cli;
