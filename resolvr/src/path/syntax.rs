//! Platform path syntax.
//!
//! A [`PathSyntax`] names the separator character and the optional volume
//! separator of a platform. It is selected once and passed explicitly to the
//! splitter, assembler and normalizer, so every platform's rules can be
//! exercised on any host.

/// The token for the current directory.
pub const CURRENT_DIR: &str = ".";

/// The token for the parent directory.
pub const PARENT_DIR: &str = "..";

/// Separator and volume rules for one platform.
///
/// # Examples
///
/// ```
/// use resolvr::path::PathSyntax;
///
/// assert_eq!(PathSyntax::POSIX.separator(), '/');
/// assert_eq!(PathSyntax::POSIX.volume_separator(), None);
///
/// assert_eq!(PathSyntax::WINDOWS.separator(), '\\');
/// assert_eq!(PathSyntax::WINDOWS.volume_separator(), Some(':'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSyntax {
    separator: char,
    volume_separator: Option<char>,
}

impl PathSyntax {
    /// `/`-separated paths with no volume prefix.
    pub const POSIX: Self = Self::new('/', None);

    /// `\`-separated paths with an optional `X:` drive prefix.
    pub const WINDOWS: Self = Self::new('\\', Some(':'));

    /// Create a syntax from its separator and optional volume separator.
    #[must_use]
    pub const fn new(separator: char, volume_separator: Option<char>) -> Self {
        Self {
            separator,
            volume_separator,
        }
    }

    /// The syntax of the platform this crate was compiled for.
    ///
    /// # Examples
    ///
    /// ```
    /// use resolvr::path::PathSyntax;
    ///
    /// let syntax = PathSyntax::native();
    /// assert_eq!(syntax.separator(), std::path::MAIN_SEPARATOR);
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// The path separator character.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// The volume separator, if this platform has volume prefixes.
    #[must_use]
    pub const fn volume_separator(&self) -> Option<char> {
        self.volume_separator
    }
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self::native()
    }
}
