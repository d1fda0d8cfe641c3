//! Core types for path resolution.
//!
//! This module defines the values that flow between the stages of the
//! resolver: the assembled input handed to a strategy, and the resolved
//! output with metadata about how it was produced.

/// How a path is resolved.
///
/// # Examples
///
/// ```
/// use resolvr::path::ResolutionMode;
///
/// assert_eq!(ResolutionMode::default(), ResolutionMode::Lexical);
/// assert!(ResolutionMode::Symlinks.touches_filesystem());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolutionMode {
    /// Pure string manipulation. Never fails and never touches the
    /// filesystem.
    #[default]
    Lexical,

    /// Delegate to the operating system, which follows symlinks and requires
    /// every component to exist.
    Symlinks,
}

impl ResolutionMode {
    /// Whether this mode performs filesystem I/O.
    #[must_use]
    pub fn touches_filesystem(self) -> bool {
        matches!(self, Self::Symlinks)
    }
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Symlinks => write!(f, "symlinks"),
        }
    }
}

/// A path prepared for resolution.
///
/// In lexical mode the volume prefix has been split off and the base joined
/// in front of the body; `subject` is that joined body. In symlink mode the
/// subject is the input path untouched and the volume is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssembledPath {
    volume: String,
    subject: String,
    is_absolute: bool,
    mode: ResolutionMode,
}

impl AssembledPath {
    /// Create a new assembled path.
    #[must_use]
    pub fn new(volume: String, subject: String, is_absolute: bool, mode: ResolutionMode) -> Self {
        Self {
            volume,
            subject,
            is_absolute,
            mode,
        }
    }

    /// The volume prefix to put back after normalization (possibly empty).
    #[must_use]
    pub fn volume(&self) -> &str {
        &self.volume
    }

    /// The string handed to the resolution strategy.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Whether the subject was absolute when assembled.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// The mode this path will be resolved with.
    #[must_use]
    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }
}

/// A fully resolved path with metadata about the resolution process.
///
/// # Examples
///
/// ```
/// use resolvr::path::{ResolutionMode, ResolvedPath};
///
/// let resolved = ResolvedPath::new(
///     "/usr/lib".to_string(),
///     "/usr/./lib".to_string(),
///     ResolutionMode::Lexical,
/// );
/// assert_eq!(resolved.path(), "/usr/lib");
/// assert_eq!(resolved.original(), "/usr/./lib");
/// assert!(!resolved.was_canonicalized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The resolved path.
    path: String,
    /// The subject that was resolved, before any processing.
    original: String,
    /// How the path was resolved.
    mode: ResolutionMode,
}

impl ResolvedPath {
    /// Create a new resolved path.
    #[must_use]
    pub fn new(path: String, original: String, mode: ResolutionMode) -> Self {
        Self {
            path,
            original,
            mode,
        }
    }

    /// Get the resolved path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the subject that was resolved.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the mode used to resolve this path.
    #[must_use]
    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    /// Check whether the operating system canonicalized this path.
    #[must_use]
    pub fn was_canonicalized(&self) -> bool {
        self.mode.touches_filesystem()
    }

    /// Convert into the underlying resolved string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }
}

impl std::fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}
