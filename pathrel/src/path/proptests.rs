//! Property-based tests for path handling.
//!
//! Note: each module already carries light property tests. This module runs
//! heavier, cross-module properties with many more cases.

use super::common_base::{common_base, common_base_index};
use super::hierarchy::{is_child, is_descendant};
use super::location::StructuredLocation;
use super::normalize::normalize;
use super::relationship::PathRelationship;
use super::split::split_path;
use crate::platform::PlatformRules;
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z]", prop::collection::vec(path_component_strategy(), 0..6), prop::bool::ANY)
        .prop_map(|(drive, parts, trailing)| {
            let mut path = format!("{drive}:\\{}", parts.join("\\"));
            if trailing && !parts.is_empty() {
                path.push('\\');
            }
            path
        })
}

fn rules_strategy() -> impl Strategy<Value = PlatformRules> {
    prop_oneof![
        Just(PlatformRules::posix()),
        Just(PlatformRules::windows()),
        Just(PlatformRules::macos()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy(), rules in rules_strategy()) {
        let once = normalize(&path, rules);
        prop_assert_eq!(normalize(&once, rules), once);
    }

    // Windows spellings normalize to a lower-case drive and forward slashes
    #[test]
    fn windows_normalization_canonical(path in windows_path_strategy()) {
        let normalized = normalize(&path, PlatformRules::windows());
        prop_assert!(!normalized.contains('\\'));
        prop_assert!(normalized.as_bytes()[0].is_ascii_lowercase());
        prop_assert!(!normalized.ends_with('/'));
        prop_assert_eq!(normalize(&normalized, PlatformRules::windows()), normalized.clone());
    }

    // Every path is a descendant of each of its prefixes cut at a separator
    #[test]
    fn path_descendant_of_every_ancestor(path in absolute_path_strategy()) {
        let rules = PlatformRules::posix();
        for (i, _) in path.match_indices('/') {
            let ancestor = if i == 0 { "/" } else { &path[..i] };
            prop_assert!(is_descendant(path.as_str(), ancestor, rules));
        }
    }

    // Children are exactly the descendants with one extra segment
    #[test]
    fn path_child_iff_one_segment(base in absolute_path_strategy(), extra in prop::collection::vec(path_component_strategy(), 0..4)) {
        let rules = PlatformRules::posix();
        let location = if extra.is_empty() {
            base.clone()
        } else {
            format!("{base}/{}", extra.join("/"))
        };
        prop_assert!(is_descendant(location.as_str(), base.as_str(), rules));
        prop_assert_eq!(is_child(location.as_str(), base.as_str(), rules), extra.len() == 1);
    }

    // Differing authorities are never related, whatever the paths
    #[test]
    fn structured_authority_mismatch_unrelated(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let rules = PlatformRules::posix();
        let left = StructuredLocation::new("file", "left", a);
        let right = StructuredLocation::new("file", "right", b);
        prop_assert!(!is_descendant(&left, &right, rules));
        prop_assert!(!is_child(&left, &right, rules));
        prop_assert_eq!(PathRelationship::between(&left, &right, rules), PathRelationship::Unrelated);
    }

    // The common base is an ancestor of both inputs
    #[test]
    fn common_base_is_shared_ancestor(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let rules = PlatformRules::posix();
        if let Some(base) = common_base(&a, &b, '/', None, rules) {
            prop_assert!(is_descendant(a.as_str(), base.as_str(), rules));
            prop_assert!(is_descendant(b.as_str(), base.as_str(), rules));
        } else {
            prop_assert_eq!(common_base_index(&a, &b, '/', None, rules), 0);
        }
    }

    // Splitting below a root and re-joining gives the normalized path back
    #[test]
    fn split_rejoins(root in absolute_path_strategy(), rest in prop::collection::vec(path_component_strategy(), 1..4)) {
        let rules = PlatformRules::posix();
        let path = format!("{root}/{}", rest.join("/"));
        let (relative, split_root) = split_path(&path, Some(&root), false, None, rules);
        prop_assert_eq!(&split_root, &root);
        prop_assert_eq!(format!("{split_root}/{relative}"), path);
    }
}
