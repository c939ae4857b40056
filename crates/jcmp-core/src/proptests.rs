//! Property tests over arbitrary JSON documents.

use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::{Map, Value};

use crate::{diff_documents, enumerate_paths, Path};

/// Arbitrary JSON documents: bounded depth, lowercase keys so every path
/// survives the rendered grammar.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,5}", inner), 0..6).prop_map(|members| {
                let mut map = Map::new();
                for (key, value) in members {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn diff_of_a_document_with_itself_is_empty(doc in arb_json()) {
        let diff = diff_documents(&doc, &doc);
        prop_assert!(diff.is_empty());
        prop_assert_eq!(diff.len(), 0);
    }

    #[test]
    fn swapping_inputs_swaps_added_and_removed(a in arb_json(), b in arb_json()) {
        let forward = diff_documents(&a, &b);
        let backward = diff_documents(&b, &a);
        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
        prop_assert_eq!(forward.changed.len(), backward.changed.len());
    }

    #[test]
    fn changed_paths_come_from_both_documents(a in arb_json(), b in arb_json()) {
        let diff = diff_documents(&a, &b);
        let paths1 = enumerate_paths(&a);
        let paths2 = enumerate_paths(&b);
        for entry in &diff.changed {
            prop_assert!(paths1.contains(&entry.path));
            prop_assert!(paths2.contains(&entry.path));
        }
    }

    #[test]
    fn added_and_removed_are_disjoint(a in arb_json(), b in arb_json()) {
        let diff = diff_documents(&a, &b);
        for path in &diff.added {
            prop_assert!(!diff.removed.contains(path));
        }
    }

    #[test]
    fn enumerated_paths_are_unique(doc in arb_json()) {
        let paths = enumerate_paths(&doc);
        let mut seen = std::collections::HashSet::new();
        for path in &paths {
            prop_assert!(seen.insert(path));
        }
    }

    #[test]
    fn enumerated_paths_round_trip_through_the_grammar(doc in arb_json()) {
        for path in enumerate_paths(&doc) {
            let reparsed: Path = path.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, path);
        }
    }

    #[test]
    fn enumerated_paths_resolve_in_their_document(doc in arb_json()) {
        for path in enumerate_paths(&doc) {
            prop_assert!(path.resolve(&doc).is_some());
        }
    }
}
