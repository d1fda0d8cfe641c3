//! Path resolution facade.
//!
//! This module provides the `PathResolver` type, which is the main interface
//! for resolving paths. It drives the pipeline:
//!
//! 1. Assemble: split the volume and join the base (lexical mode only)
//! 2. Resolve: normalize lexically, or delegate to the operating system
//! 3. Re-attach the volume prefix

use crate::config::ResolveConfig;
use crate::error::{Error, Result};
use crate::path::canonicalize::{Canonicalize, OsCanonicalizer};
use crate::path::normalize::normalize;
use crate::path::types::{AssembledPath, ResolutionMode, ResolvedPath};
use crate::path::{assemble, PathSyntax};

/// Resolves paths with a fixed syntax and canonicalization capability.
///
/// # Examples
///
/// ```
/// use resolvr::path::{PathResolver, PathSyntax};
///
/// let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
///
/// let resolved = resolver.resolve_lexical("b/../c", Some("/a"));
/// assert_eq!(resolved.path(), "/a/c");
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver<C = OsCanonicalizer> {
    syntax: PathSyntax,
    canonicalizer: C,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            syntax: PathSyntax::native(),
            canonicalizer: OsCanonicalizer,
        }
    }
}

impl PathResolver {
    /// Create a resolver for the native platform backed by the OS.
    ///
    /// # Examples
    ///
    /// ```
    /// use resolvr::path::{PathResolver, PathSyntax};
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.syntax(), PathSyntax::native());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Canonicalize> PathResolver<C> {
    /// Use a different path syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: PathSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Use a different canonicalization capability for symlink mode.
    #[must_use]
    pub fn with_canonicalizer<D: Canonicalize>(self, canonicalizer: D) -> PathResolver<D> {
        PathResolver {
            syntax: self.syntax,
            canonicalizer,
        }
    }

    /// The path syntax this resolver uses.
    #[must_use]
    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Prepare `config` for resolution without resolving it yet.
    #[must_use]
    pub fn assemble(&self, config: &ResolveConfig) -> AssembledPath {
        assemble::assemble(config, self.syntax)
    }

    /// Resolve an assembled path and put its volume back in front.
    ///
    /// # Errors
    ///
    /// Lexical resolution never fails. Symlink resolution fails when the
    /// operating system cannot resolve the subject, or resolves it to a path
    /// that is not valid UTF-8.
    pub fn finish(&self, assembled: AssembledPath) -> Result<ResolvedPath> {
        let resolved = match assembled.mode() {
            ResolutionMode::Lexical => self.normalize_assembled(&assembled),
            ResolutionMode::Symlinks => {
                let canonical = self.canonicalizer.resolve_absolute(assembled.subject())?;
                canonical
                    .into_os_string()
                    .into_string()
                    .map_err(|raw| Error::InvalidPath {
                        path: raw.into(),
                        reason: "Path contains invalid UTF-8".to_string(),
                    })?
            }
        };

        log::debug!(
            "Resolved {:?} to {resolved:?} ({} mode)",
            assembled.subject(),
            assembled.mode()
        );

        let path = format!("{}{resolved}", assembled.volume());
        Ok(ResolvedPath::new(
            path,
            assembled.subject().to_string(),
            assembled.mode(),
        ))
    }

    /// Resolve a configured path.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::finish`].
    ///
    /// # Examples
    ///
    /// ```
    /// use resolvr::path::{PathResolver, PathSyntax};
    /// use resolvr::ResolveConfig;
    ///
    /// let resolver = PathResolver::new().with_syntax(PathSyntax::WINDOWS);
    /// let resolved = resolver.resolve(&ResolveConfig::new(r"C:\a\..\b")).unwrap();
    /// assert_eq!(resolved.path(), r"C:\b");
    /// ```
    pub fn resolve(&self, config: &ResolveConfig) -> Result<ResolvedPath> {
        self.finish(self.assemble(config))
    }

    /// Resolve `path` under an optional `base` by string manipulation only.
    ///
    /// # Examples
    ///
    /// ```
    /// use resolvr::path::{PathResolver, PathSyntax};
    ///
    /// let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
    /// assert_eq!(resolver.resolve_lexical("../a", None).path(), "a");
    /// assert_eq!(resolver.resolve_lexical("b", Some("a")).path(), "a/b");
    /// ```
    #[must_use]
    pub fn resolve_lexical(&self, path: &str, base: Option<&str>) -> ResolvedPath {
        let mut config = ResolveConfig::new(path);
        if let Some(base) = base {
            config = config.with_base(base);
        }
        let assembled = self.assemble(&config);
        let resolved = self.normalize_assembled(&assembled);
        ResolvedPath::new(
            format!("{}{resolved}", assembled.volume()),
            assembled.subject().to_string(),
            ResolutionMode::Lexical,
        )
    }

    /// Resolve `path` through the operating system, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the canonicalizer cannot resolve the path.
    pub fn resolve_symlinks(&self, path: &str) -> Result<ResolvedPath> {
        self.resolve(&ResolveConfig::new(path).with_mode(ResolutionMode::Symlinks))
    }

    fn normalize_assembled(&self, assembled: &AssembledPath) -> String {
        normalize(assembled.subject(), assembled.is_absolute(), self.syntax)
    }
}
