//! Path resolution: lexical normalization and delegated canonicalization.
//!
//! # Key Concepts
//!
//! ## Syntax and volumes
//!
//! A [`PathSyntax`] names the separator and, on platforms that have them, the
//! volume separator. A volume prefix (such as `C:`) is two characters, is
//! split off before normalization and is put back, unmodified, afterwards.
//!
//! ## Lexical normalization
//!
//! The default mode rewrites the path as a string:
//! - Doubled separators and `.` segments are dropped
//! - `..` removes the preceding segment; with none before it, it is dropped
//! - An empty result becomes the separator (absolute) or `.` (relative)
//!
//! No filesystem access happens and the operation cannot fail.
//!
//! ## Delegated resolution
//!
//! [`ResolutionMode::Symlinks`] hands the path, as given, to the operating
//! system. Symlinks are followed and every component must exist. The base
//! path and volume handling are bypassed in this mode.
//!
//! # Examples
//!
//! ```
//! use resolvr::path::{PathResolver, PathSyntax};
//!
//! let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
//!
//! assert_eq!(resolver.resolve_lexical("a/b/../c", None).path(), "a/c");
//! assert_eq!(resolver.resolve_lexical("/a/..", None).path(), "/");
//! assert_eq!(resolver.resolve_lexical("b", Some("a")).path(), "a/b");
//! ```

pub mod assemble;
pub mod canonicalize;
pub mod normalize;
pub mod resolver;
mod syntax;
mod types;
mod volume;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use canonicalize::{Canonicalize, OsCanonicalizer};
pub use normalize::normalize_path;
pub use resolver::PathResolver;
pub use syntax::{PathSyntax, CURRENT_DIR, PARENT_DIR};
pub use types::{AssembledPath, ResolutionMode, ResolvedPath};
pub use volume::split_volume;
