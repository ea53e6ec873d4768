//! Test fixtures and store helpers.

use docstore_core::{BulkLoader, CollectionRegistry};
use serde_json::{json, Value};
use std::sync::Arc;

/// Returns a typical user payload.
pub fn sample_user() -> Value {
    json!({"name": "Ann", "age": 30})
}

/// Returns a payload exercising nested objects, arrays, and mixed
/// value types.
pub fn sample_nested() -> Value {
    json!({
        "profile": {
            "tags": ["alpha", 2, null],
            "active": true,
            "scores": {"math": 91, "art": 77.5}
        }
    })
}

/// Returns `n` distinct object payloads.
pub fn user_batch(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| json!({"name": format!("user-{i}"), "age": 20 + (i as i64 % 50)}))
        .collect()
}

/// A registry plus a bulk loader over it, for tests that exercise both
/// the single-insert and batch paths.
pub struct TestStore {
    /// The shared registry.
    pub registry: Arc<CollectionRegistry>,
    /// Bulk/file ingestion coordinator over the same registry.
    pub loader: BulkLoader,
}

impl TestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let registry = Arc::new(CollectionRegistry::new());
        let loader = BulkLoader::new(Arc::clone(&registry));
        Self { registry, loader }
    }

    /// Creates a store pre-populated with the given collections, each
    /// holding the requested number of generated user documents.
    pub fn with_collections(collections: &[(&str, usize)]) -> Self {
        let store = Self::new();
        for (name, docs) in collections {
            store.loader.bulk_insert(name, user_batch(*docs));
        }
        store
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_collections_populates() {
        let store = TestStore::with_collections(&[("users", 3), ("orders", 2)]);
        let stats = store.registry.stats();
        assert_eq!(stats.collections, 2);
        assert_eq!(stats.documents, 5);
    }

    #[test]
    fn user_batch_is_distinct() {
        let batch = user_batch(4);
        assert_eq!(batch.len(), 4);
        assert_ne!(batch[0], batch[1]);
        assert!(batch.iter().all(|v| v.is_object()));
    }
}
