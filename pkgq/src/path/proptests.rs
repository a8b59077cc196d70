//! Property-based tests for path handling.
//!
//! The normalize module has example-based tests for normalization; this
//! module checks the structural guarantees of real-path extension against
//! generated inputs (which, by construction, do not exist on disk).

use super::normalize::normalize;
use super::realpaths::extend_realpaths;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn path_list_strategy() -> impl Strategy<Value = Vec<PathBuf>> {
    prop::collection::vec(absolute_path_strategy(), 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy()) {
        if let Ok(normalized_once) = normalize(&path) {
            if let Ok(normalized_twice) = normalize(&normalized_once) {
                prop_assert_eq!(normalized_once, normalized_twice);
            }
        }
    }

    // The input list is always a prefix of the extended list
    #[test]
    fn extend_preserves_input_prefix(paths in path_list_strategy()) {
        let extended = extend_realpaths(&paths).unwrap();
        prop_assert!(extended.len() >= paths.len());
        prop_assert_eq!(&extended[..paths.len()], &paths[..]);
    }

    // Appended entries are distinct from each other and from every input
    #[test]
    fn extend_appends_no_duplicates(paths in path_list_strategy()) {
        let extended = extend_realpaths(&paths).unwrap();
        let mut seen = std::collections::HashSet::new();
        for path in &paths {
            seen.insert(path.clone());
        }
        for appended in &extended[paths.len()..] {
            prop_assert!(seen.insert(appended.clone()));
        }
    }

    // Extending a second time changes nothing
    #[test]
    fn extend_is_idempotent(paths in path_list_strategy()) {
        let once = extend_realpaths(&paths).unwrap();
        let twice = extend_realpaths(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
