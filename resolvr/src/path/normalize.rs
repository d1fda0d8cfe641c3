//! Lexical path normalization.
//!
//! This module rewrites a path purely as a string:
//! - Dropping empty segments left by doubled separators
//! - Dropping `.` segments
//! - Collapsing `..` against the preceding segment
//!
//! The filesystem is never consulted, so a `..` with nothing before it
//! cannot be resolved and is dropped.

use crate::path::syntax::{CURRENT_DIR, PARENT_DIR};
use crate::path::{split_volume, PathSyntax};

/// Check whether a path body is absolute, i.e. starts with the separator.
///
/// # Examples
///
/// ```
/// use resolvr::path::normalize::is_absolute;
/// use resolvr::path::PathSyntax;
///
/// assert!(is_absolute("/usr", PathSyntax::POSIX));
/// assert!(!is_absolute("usr", PathSyntax::POSIX));
/// assert!(is_absolute(r"\Windows", PathSyntax::WINDOWS));
/// ```
#[must_use]
pub fn is_absolute(body: &str, syntax: PathSyntax) -> bool {
    body.starts_with(syntax.separator())
}

/// Normalize a path body (a path with its volume prefix removed).
///
/// `is_absolute` decides whether the result is rooted. An empty result is
/// the separator for absolute paths and `.` for relative ones.
///
/// # Examples
///
/// ```
/// use resolvr::path::normalize::normalize;
/// use resolvr::path::PathSyntax;
///
/// assert_eq!(normalize("/a/./b/../c", true, PathSyntax::POSIX), "/a/c");
/// assert_eq!(normalize("a//b", false, PathSyntax::POSIX), "a/b");
/// assert_eq!(normalize("a/..", false, PathSyntax::POSIX), ".");
/// assert_eq!(normalize("../a", false, PathSyntax::POSIX), "a");
/// ```
#[must_use]
pub fn normalize(body: &str, is_absolute: bool, syntax: PathSyntax) -> String {
    let separator = syntax.separator();
    let mut segments: Vec<&str> = Vec::new();

    for token in body.split(separator) {
        match token {
            "" | CURRENT_DIR => {}
            PARENT_DIR => {
                // Nothing to pop means nothing to go up from; the `..` is lost.
                segments.pop();
            }
            _ => segments.push(token),
        }
    }

    if segments.is_empty() {
        return if is_absolute {
            separator.to_string()
        } else {
            CURRENT_DIR.to_string()
        };
    }

    let mut result = String::with_capacity(body.len() + 1);
    if is_absolute {
        result.push(separator);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(segment);
    }
    result
}

/// Normalize a complete path string, keeping its volume prefix.
///
/// This splits off the volume, decides absoluteness from the body,
/// normalizes the body and puts the volume back in front.
///
/// # Examples
///
/// ```
/// use resolvr::path::normalize::normalize_path;
/// use resolvr::path::PathSyntax;
///
/// assert_eq!(normalize_path("/usr//lib/./x/..", PathSyntax::POSIX), "/usr/lib");
/// assert_eq!(normalize_path(r"C:\a\..\b", PathSyntax::WINDOWS), r"C:\b");
/// ```
#[must_use]
pub fn normalize_path(path: &str, syntax: PathSyntax) -> String {
    let (volume, body) = split_volume(path, syntax);
    let normalized = normalize(body, is_absolute(body, syntax), syntax);
    format!("{volume}{normalized}")
}
