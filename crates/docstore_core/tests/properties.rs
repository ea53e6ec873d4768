//! Property tests for table and registry invariants.

use docstore_core::{CollectionRegistry, DocumentTable};
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

proptest! {
    // Every page window is a contiguous slice of the insertion order,
    // and tiling the table by `limit` visits each document exactly once.
    #[test]
    fn pagination_tiles_the_table(size in 0usize..40, limit in 1usize..10) {
        let mut table = DocumentTable::new("tiled");
        let ids: Vec<_> = (0..size).map(|i| table.insert(json!({ "n": i })).id).collect();

        let mut seen = Vec::new();
        let mut offset = 0;
        loop {
            let (docs, total) = table.page(limit, offset);
            prop_assert_eq!(total, size);
            prop_assert!(docs.len() <= limit);
            if docs.is_empty() {
                break;
            }
            seen.extend(docs.into_iter().map(|d| d.id));
            offset += limit;
        }

        prop_assert_eq!(seen, ids);
    }

    #[test]
    fn page_beyond_end_is_always_empty(size in 0usize..20, extra in 0usize..20, limit in 0usize..10) {
        let mut table = DocumentTable::new("bounds");
        for i in 0..size {
            table.insert(json!({ "n": i }));
        }

        let (docs, total) = table.page(limit, size + extra);
        prop_assert!(docs.is_empty());
        prop_assert_eq!(total, size);
    }

    // Deleting any subset of documents leaves exactly the complement,
    // still in insertion order, and deleted IDs stay gone.
    #[test]
    fn deletion_is_final_and_order_preserving(size in 1usize..20, picks in prop::collection::vec(any::<prop::sample::Index>(), 1..5)) {
        let mut table = DocumentTable::new("deletions");
        let ids: Vec<_> = (0..size).map(|i| table.insert(json!({ "n": i })).id).collect();

        let mut removed = HashSet::new();
        for pick in picks {
            let id = &ids[pick.index(size)];
            if removed.insert(id.clone()) {
                table.remove(id).unwrap();
            }
        }

        for id in &ids {
            if removed.contains(id) {
                prop_assert!(table.get(id).is_err());
            } else {
                prop_assert!(table.get(id).is_ok());
            }
        }

        let (docs, total) = table.page(size, 0);
        prop_assert_eq!(total, size - removed.len());
        let expected: Vec<_> = ids.iter().filter(|id| !removed.contains(*id)).cloned().collect();
        let listed: Vec<_> = docs.into_iter().map(|d| d.id).collect();
        prop_assert_eq!(listed, expected);
    }

    // Cascade deletion always leaves the rest of the registry intact.
    #[test]
    fn cascade_only_affects_the_target(doomed_docs in 0usize..10, spared_docs in 0usize..10) {
        let registry = CollectionRegistry::new();
        let doomed = registry.get_or_create("doomed");
        for i in 0..doomed_docs {
            doomed.insert(json!({ "n": i }));
        }
        let spared = registry.get_or_create("spared");
        let spared_ids: Vec<_> = (0..spared_docs)
            .map(|i| spared.insert(json!({ "n": i })).id)
            .collect();

        registry.delete("doomed").unwrap();

        prop_assert!(registry.get("doomed").is_err());
        let spared = registry.get("spared").unwrap();
        for id in &spared_ids {
            prop_assert!(spared.get(id).is_ok());
        }
        prop_assert_eq!(registry.stats().documents, spared_docs);
    }
}
