#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # resolvr
//!
//! A library for resolving filesystem paths to canonical form.
//!
//! Paths are resolved either lexically, by rewriting `.`, `..` and doubled
//! separators without touching the filesystem, or by delegating to the
//! operating system, which also follows symlinks.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: Drives resolution for a platform syntax
//! - [`ResolveConfig`]: What to resolve, relative to what, and how
//! - [`PathSyntax`]: Separator and volume rules of a platform
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use resolvr::{PathResolver, PathSyntax, ResolveConfig};
//!
//! let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
//!
//! let config = ResolveConfig::new("../lib//./x").with_base("/usr/bin");
//! let resolved = resolver.resolve(&config).unwrap();
//! assert_eq!(resolved.path(), "/usr/lib/x");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::ResolveConfig;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathResolver, PathSyntax, ResolutionMode, ResolvedPath};
