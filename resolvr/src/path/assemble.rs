//! Path assembly: joining the base and preparing the strategy input.

use crate::config::ResolveConfig;
use crate::path::normalize::is_absolute;
use crate::path::types::{AssembledPath, ResolutionMode};
use crate::path::{split_volume, PathSyntax};

/// Join `path` under `base` with the separator.
///
/// The base is not normalized on its own; only the joined string is
/// normalized later. An empty base leaves `path` unchanged.
///
/// # Examples
///
/// ```
/// use resolvr::path::assemble::join_base;
/// use resolvr::path::PathSyntax;
///
/// assert_eq!(join_base("b", Some("a"), PathSyntax::POSIX), "a/b");
/// assert_eq!(join_base("b", Some(""), PathSyntax::POSIX), "b");
/// assert_eq!(join_base("b", None, PathSyntax::POSIX), "b");
/// ```
#[must_use]
pub fn join_base(path: &str, base: Option<&str>, syntax: PathSyntax) -> String {
    match base {
        Some(base) if !base.is_empty() => {
            let mut joined = String::with_capacity(base.len() + 1 + path.len());
            joined.push_str(base);
            joined.push(syntax.separator());
            joined.push_str(path);
            joined
        }
        _ => path.to_string(),
    }
}

/// Prepare a configured path for its resolution strategy.
///
/// Lexical mode strips the volume from the path, joins the base in front and
/// records whether the result is absolute. Symlink mode hands the path to the
/// operating system as given: the base is ignored and no volume is split.
///
/// # Examples
///
/// ```
/// use resolvr::path::assemble::assemble;
/// use resolvr::path::PathSyntax;
/// use resolvr::ResolveConfig;
///
/// let config = ResolveConfig::new(r"C:x\y").with_base(r"\base");
/// let assembled = assemble(&config, PathSyntax::WINDOWS);
/// assert_eq!(assembled.volume(), "C:");
/// assert_eq!(assembled.subject(), r"\base\x\y");
/// assert!(assembled.is_absolute());
/// ```
#[must_use]
pub fn assemble(config: &ResolveConfig, syntax: PathSyntax) -> AssembledPath {
    match config.mode() {
        ResolutionMode::Symlinks => AssembledPath::new(
            String::new(),
            config.path().to_string(),
            is_absolute(config.path(), syntax),
            ResolutionMode::Symlinks,
        ),
        ResolutionMode::Lexical => {
            let (volume, body) = split_volume(config.path(), syntax);
            let subject = join_base(body, config.base(), syntax);
            let absolute = is_absolute(&subject, syntax);
            AssembledPath::new(volume.to_string(), subject, absolute, ResolutionMode::Lexical)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_base_keeps_base_verbatim() {
        assert_eq!(join_base("c", Some("/a/../b/"), PathSyntax::POSIX), "/a/../b//c");
    }

    #[test]
    fn test_join_base_windows_separator() {
        assert_eq!(join_base("b", Some("a"), PathSyntax::WINDOWS), r"a\b");
    }

    #[test]
    fn test_assemble_lexical_without_base() {
        let config = ResolveConfig::new("/a/./b");
        let assembled = assemble(&config, PathSyntax::POSIX);
        assert_eq!(assembled.volume(), "");
        assert_eq!(assembled.subject(), "/a/./b");
        assert!(assembled.is_absolute());
        assert_eq!(assembled.mode(), ResolutionMode::Lexical);
    }

    #[test]
    fn test_assemble_absoluteness_follows_base() {
        let config = ResolveConfig::new("/abs").with_base("rel");
        let assembled = assemble(&config, PathSyntax::POSIX);
        assert_eq!(assembled.subject(), "rel//abs");
        assert!(!assembled.is_absolute());
    }

    #[test]
    fn test_assemble_strips_volume_before_join() {
        let config = ResolveConfig::new(r"D:\dir").with_base("base");
        let assembled = assemble(&config, PathSyntax::WINDOWS);
        assert_eq!(assembled.volume(), "D:");
        assert_eq!(assembled.subject(), r"base\\dir");
        assert!(!assembled.is_absolute());
    }

    #[test]
    fn test_assemble_symlinks_ignores_base_and_volume() {
        let config = ResolveConfig::new(r"C:\x")
            .with_base("ignored")
            .with_mode(ResolutionMode::Symlinks);
        let assembled = assemble(&config, PathSyntax::WINDOWS);
        assert_eq!(assembled.volume(), "");
        assert_eq!(assembled.subject(), r"C:\x");
        assert_eq!(assembled.mode(), ResolutionMode::Symlinks);
    }
}
