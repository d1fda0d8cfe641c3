//! Integration tests for delegated (symlink-following) resolution.
//!
//! These tests use real temporary directories, so they exercise the
//! operating system's canonicalization rather than a mock.

use std::fs;

use resolvr::{PathResolver, ResolutionMode, ResolveConfig};
use tempfile::tempdir;

fn canonical(path: &std::path::Path) -> String {
    PathResolver::new()
        .resolve_symlinks(path.to_str().unwrap())
        .unwrap()
        .into_string()
}

#[test]
fn test_existing_directory_resolves_absolute() {
    let dir = tempdir().unwrap();
    let resolved = PathResolver::new()
        .resolve_symlinks(dir.path().to_str().unwrap())
        .unwrap();

    assert!(std::path::Path::new(resolved.path()).is_absolute());
    assert_eq!(resolved.mode(), ResolutionMode::Symlinks);
    assert!(resolved.was_canonicalized());
}

#[test]
fn test_missing_target_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = PathResolver::new()
        .resolve_symlinks(missing.to_str().unwrap())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[cfg(unix)]
#[test]
fn test_missing_intermediate_component_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("..").join("x");
    fs::create_dir(dir.path().join("x")).unwrap();

    let result = PathResolver::new().resolve_symlinks(path.to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_base_is_ignored_in_symlink_mode() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    fs::create_dir(&target).unwrap();

    let config = ResolveConfig::new(target.to_str().unwrap())
        .with_base("/definitely/not/a/real/base")
        .with_mode(ResolutionMode::Symlinks);

    let resolved = PathResolver::new().resolve(&config).unwrap();
    assert_eq!(resolved.path(), canonical(&target));
}

#[cfg(unix)]
#[test]
fn test_symlink_is_followed() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let target = dir.path().join("real");
    let link = dir.path().join("alias");
    fs::create_dir(&target).unwrap();
    symlink(&target, &link).unwrap();

    assert_eq!(canonical(&link), canonical(&target));
}

#[cfg(unix)]
#[test]
fn test_symlink_then_parent_differs_from_lexical() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    let deep = dir.path().join("a").join("b");
    fs::create_dir_all(&deep).unwrap();
    symlink(&deep, dir.path().join("link")).unwrap();

    // link/.. is "a" on disk, but lexically it is the temp dir itself.
    let through_link = dir.path().join("link").join("..");
    let os = canonical(&through_link);
    assert_eq!(os, canonical(&dir.path().join("a")));

    let resolver = PathResolver::new();
    let lexical = resolver.resolve_lexical(through_link.to_str().unwrap(), None);
    let dir_lexical = resolver.resolve_lexical(dir.path().to_str().unwrap(), None);
    assert_eq!(lexical.path(), dir_lexical.path());
}
