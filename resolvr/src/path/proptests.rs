//! Property-based tests for path resolution.
//!
//! Note: The normalize module already has property tests for the
//! normalizer itself. This module focuses on base joining, volumes and the
//! resolver facade.

use super::normalize::normalize_path;
use super::{PathResolver, PathSyntax};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|p| format!("/{p}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining with a base is the same as normalizing "base/path"
    #[test]
    fn base_join_equivalence(base in absolute_path_strategy(), path in relative_path_strategy()) {
        let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
        let joined = resolver.resolve_lexical(&path, Some(&base));
        prop_assert_eq!(
            joined.path(),
            normalize_path(&format!("{base}/{path}"), PathSyntax::POSIX)
        );
    }

    // An absolute base always yields an absolute result
    #[test]
    fn absolute_base_stays_absolute(base in absolute_path_strategy(), path in relative_path_strategy()) {
        let resolver = PathResolver::new().with_syntax(PathSyntax::POSIX);
        prop_assert!(resolver.resolve_lexical(&path, Some(&base)).path().starts_with('/'));
    }

    // The drive letter survives resolution untouched
    #[test]
    fn volume_prefix_preserved(drive in "[A-Za-z]", path in absolute_path_strategy()) {
        let input = format!("{drive}:{}", path.replace('/', "\\"));
        let resolver = PathResolver::new().with_syntax(PathSyntax::WINDOWS);
        let resolved = resolver.resolve_lexical(&input, None);
        let expected_prefix = format!("{drive}:\\");
        prop_assert!(resolved.path().starts_with(&expected_prefix));
    }

    // Resolving a resolved path changes nothing, volume included
    #[test]
    fn resolution_idempotent_with_volume(drive in "[A-Za-z]", path in relative_path_strategy()) {
        let input = format!("{drive}:{}", path.replace('/', "\\"));
        let resolver = PathResolver::new().with_syntax(PathSyntax::WINDOWS);
        let once = resolver.resolve_lexical(&input, None);
        let twice = resolver.resolve_lexical(once.path(), None);
        prop_assert_eq!(once.path(), twice.path());
    }
}
