//! Delegated canonicalization.
//!
//! The operating system's canonicalization primitive follows every symlink,
//! checks that each component exists and returns an absolute path. This
//! module wraps it behind the [`Canonicalize`] capability so the resolver can
//! be driven by other implementations in tests.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves a path to an absolute, symlink-free path.
#[cfg_attr(test, mockall::automock)]
pub trait Canonicalize {
    /// Resolve `path` to its absolute canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn resolve_absolute(&self, path: &str) -> Result<PathBuf>;
}

/// [`Canonicalize`] implementation backed by [`std::fs::canonicalize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCanonicalizer;

impl Canonicalize for OsCanonicalizer {
    fn resolve_absolute(&self, path: &str) -> Result<PathBuf> {
        canonicalize(Path::new(path))
    }
}

/// Canonicalize a path by following symlinks.
///
/// The path must exist for canonicalization to succeed. On Windows the
/// verbatim `\\?\` prefix is removed from drive paths.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty or does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - The OS fails for another reason, such as a symlink loop (`Unresolvable`)
///
/// # Examples
///
/// ```no_run
/// use resolvr::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(Error::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let canonical = fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Unresolvable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(strip_verbatim_prefix(canonical))
}

#[cfg(windows)]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    const VERBATIM: &str = r"\\?\";

    let Some(drive_path) = path.to_str().and_then(|s| s.strip_prefix(VERBATIM)) else {
        return path;
    };

    if drive_path.chars().nth(1) == Some(':') {
        PathBuf::from(drive_path)
    } else {
        path
    }
}

#[cfg(not(windows))]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    path
}
