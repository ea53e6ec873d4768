//! Property-based generators using proptest.
//!
//! Strategies for collection names and arbitrary JSON payloads that
//! exercise the schemaless guarantees of the store.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for generating valid collection names.
pub fn collection_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,31}")
        .expect("Invalid regex")
        .prop_filter("Collection name must not be empty", |s| !s.is_empty())
}

/// Strategy for generating arbitrary JSON values: scalars, arrays, and
/// objects, nested a few levels deep.
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _-]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for generating JSON objects (the shape the batch paths
/// accept without skipping).
pub fn json_object_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", json_value_strategy(), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

/// Strategy for generating a batch of JSON objects.
pub fn object_batch_strategy(max_len: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(json_object_strategy(), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestStore;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn generated_names_are_wellformed(name in collection_name_strategy()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().next().unwrap().is_ascii_alphabetic());
        }

        #[test]
        fn inserted_ids_are_unique(batch in object_batch_strategy(16)) {
            let store = TestStore::new();
            let report = store.loader.bulk_insert("props", batch);

            let ids: HashSet<_> = report.documents.iter().map(|d| d.id.clone()).collect();
            prop_assert_eq!(ids.len(), report.count);
        }

        #[test]
        fn any_json_roundtrips(value in json_value_strategy()) {
            let store = TestStore::new();
            let handle = store.registry.get_or_create("roundtrip");

            let doc = handle.insert(value.clone());
            let fetched = handle.get(&doc.id).unwrap();
            prop_assert_eq!(fetched.data, value);
        }

        #[test]
        fn replace_overwrites_fully(
            first in json_object_strategy(),
            second in json_object_strategy(),
        ) {
            let store = TestStore::new();
            let handle = store.registry.get_or_create("replace");

            let doc = handle.insert(first);
            let updated = handle.replace(&doc.id, second.clone()).unwrap();
            prop_assert_eq!(&updated.data, &second);
            prop_assert_eq!(handle.get(&doc.id).unwrap().data, second);
        }

        #[test]
        fn bulk_count_never_exceeds_input(batch in prop::collection::vec(json_value_strategy(), 0..16)) {
            let store = TestStore::new();
            let input_len = batch.len();
            let objects = batch.iter().filter(|v| v.is_object()).count();

            let report = store.loader.bulk_insert("counted", batch);
            prop_assert_eq!(report.count, report.documents.len());
            prop_assert!(report.count <= input_len);
            prop_assert_eq!(report.count, objects);
        }
    }
}
