//! Volume prefix splitting.

use crate::path::PathSyntax;

/// Split a path into its volume prefix and body.
///
/// When the syntax has a volume separator and the second character of `path`
/// is that separator, the first two characters form the volume prefix.
/// Otherwise the prefix is empty and the body is the whole path. Paths shorter
/// than two characters never have a prefix.
///
/// # Examples
///
/// ```
/// use resolvr::path::{split_volume, PathSyntax};
///
/// assert_eq!(split_volume(r"C:\a\b", PathSyntax::WINDOWS), ("C:", r"\a\b"));
/// assert_eq!(split_volume(r"a\b", PathSyntax::WINDOWS), ("", r"a\b"));
/// assert_eq!(split_volume("C:/a", PathSyntax::POSIX), ("", "C:/a"));
/// ```
#[must_use]
pub fn split_volume(path: &str, syntax: PathSyntax) -> (&str, &str) {
    let Some(volume_separator) = syntax.volume_separator() else {
        return ("", path);
    };

    let mut chars = path.char_indices().skip(1);
    match chars.next() {
        Some((index, c)) if c == volume_separator => path.split_at(index + c.len_utf8()),
        _ => ("", path),
    }
}
