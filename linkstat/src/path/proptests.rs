//! Property-based tests for the path resolver.

use super::resolver::PathResolver;
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    relative_path_strategy().prop_map(|rel| PathBuf::from("/").join(rel))
}

fn base_dir_strategy() -> impl Strategy<Value = PathBuf> {
    prop_oneof![relative_path_strategy(), absolute_path_strategy()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rooted targets are never rewritten
    #[test]
    fn absolute_target_unchanged(base in base_dir_strategy(), target in absolute_path_strategy()) {
        let resolver = PathResolver::new();
        prop_assert_eq!(resolver.resolve(&base, &target), target);
    }

    // Relative targets are joined onto a non-empty base
    #[test]
    fn relative_target_joined(base in base_dir_strategy(), target in relative_path_strategy()) {
        let resolver = PathResolver::new();
        let resolved = resolver.resolve(&base, &target);
        prop_assert!(resolved.starts_with(&base));
        prop_assert!(resolved.ends_with(&target));
        prop_assert_eq!(resolved, base.join(&target));
    }

    // An empty base leaves relative targets untouched
    #[test]
    fn empty_base_is_identity(target in relative_path_strategy()) {
        let resolver = PathResolver::new();
        prop_assert_eq!(resolver.resolve(&PathBuf::new(), &target), target);
    }

    // The retry candidate exists exactly when prefixing can change the path
    #[test]
    fn retry_only_for_relative_with_base(base in base_dir_strategy(), target in relative_path_strategy()) {
        let resolver = PathResolver::new();
        prop_assert_eq!(resolver.retry_path(&base, &target), Some(base.join(&target)));
        prop_assert_eq!(resolver.retry_path(&PathBuf::new(), &target), None);
        let rooted = PathBuf::from("/").join(&target);
        prop_assert_eq!(resolver.retry_path(&base, &rooted), None);
    }

    // The next hop's base is the link's directory for relative targets only
    #[test]
    fn link_parent_matches_link_directory(dir in base_dir_strategy(), name in path_component_strategy(), target in relative_path_strategy()) {
        let resolver = PathResolver::new();
        let link = dir.join(&name);
        prop_assert_eq!(resolver.link_parent(&link, &target), dir);
        let rooted = PathBuf::from("/").join(&target);
        prop_assert_eq!(resolver.link_parent(&link, &rooted), PathBuf::new());
    }
}
