//! CLI command implementations.
//!
//! resolvr has a single command:
//! - `resolve`: Resolve a path, lexically or through the OS, and print it

pub mod resolve;

pub use resolve::ResolveCommand;
