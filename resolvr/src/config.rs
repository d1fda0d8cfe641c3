//! Resolution configuration.
//!
//! A [`ResolveConfig`] is built once from the caller's arguments and handed
//! by reference to the resolver. It is never modified during resolution.

use crate::path::ResolutionMode;

/// What to resolve and how.
///
/// # Examples
///
/// ```
/// use resolvr::path::ResolutionMode;
/// use resolvr::ResolveConfig;
///
/// let config = ResolveConfig::new("src/../lib")
///     .with_base("/project")
///     .with_mode(ResolutionMode::Lexical);
///
/// assert_eq!(config.path(), "src/../lib");
/// assert_eq!(config.base(), Some("/project"));
/// assert_eq!(config.mode(), ResolutionMode::Lexical);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolveConfig {
    path: String,
    base: Option<String>,
    mode: ResolutionMode,
}

impl ResolveConfig {
    /// Create a lexical configuration for `path` with no base.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            base: None,
            mode: ResolutionMode::default(),
        }
    }

    /// Set the base path the input is resolved relative to.
    ///
    /// An empty base is treated as no base.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.base = (!base.is_empty()).then_some(base);
        self
    }

    /// Set the resolution mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The path to resolve.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The base path, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// The resolution mode.
    #[must_use]
    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }
}
