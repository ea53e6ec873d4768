//! Collection registry and cascading deletion.

use crate::document::{Document, DocumentId};
use crate::error::{CoreError, CoreResult};
use crate::stats::StoreStats;
use crate::table::DocumentTable;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Metadata for a registered collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection name, unique across the registry and immutable.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Bumped on every document mutation in the collection.
    pub updated_at: DateTime<Utc>,
}

impl CollectionInfo {
    fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A registered collection: metadata plus its document table.
///
/// Each handle is independently lockable, so operations on different
/// collections never contend with each other. Within one collection,
/// mutations serialize on the table's write lock while reads share the
/// read lock.
pub struct CollectionHandle {
    info: RwLock<CollectionInfo>,
    table: RwLock<DocumentTable>,
}

impl CollectionHandle {
    fn new(name: &str) -> Self {
        Self {
            info: RwLock::new(CollectionInfo::new(name)),
            table: RwLock::new(DocumentTable::new(name)),
        }
    }

    /// Returns a snapshot of the collection metadata.
    pub fn info(&self) -> CollectionInfo {
        self.info.read().clone()
    }

    fn touch(&self) {
        self.info.write().updated_at = Utc::now();
    }

    /// Inserts a document, assigning a fresh ID.
    pub fn insert(&self, data: Value) -> Document {
        let doc = self.table.write().insert(data);
        self.touch();
        doc
    }

    /// Fetches a document by ID.
    pub fn get(&self, id: &DocumentId) -> CoreResult<Document> {
        self.table.read().get(id)
    }

    /// Replaces the entire payload of an existing document.
    pub fn replace(&self, id: &DocumentId, data: Value) -> CoreResult<Document> {
        let doc = self.table.write().replace(id, data)?;
        self.touch();
        Ok(doc)
    }

    /// Removes a document.
    pub fn remove(&self, id: &DocumentId) -> CoreResult<()> {
        self.table.write().remove(id)?;
        self.touch();
        Ok(())
    }

    /// Returns a page of documents plus the total count.
    ///
    /// The snapshot is self-consistent: the read lock is held for the
    /// whole scan, so no entry appears twice or half-mutated.
    pub fn page(&self, limit: usize, offset: usize) -> (Vec<Document>, usize) {
        self.table.read().page(limit, offset)
    }

    /// Number of documents currently in the collection.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Returns true if the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

impl std::fmt::Debug for CollectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionHandle")
            .field("name", &self.info.read().name)
            .field("documents", &self.len())
            .finish()
    }
}

/// Process-wide registry mapping collection names to document tables.
///
/// Registration, deletion, and name resolution are mutually exclusive,
/// so no reader can observe a collection that is half-deleted.
pub struct CollectionRegistry {
    collections: RwLock<IndexMap<String, Arc<CollectionHandle>>>,
}

impl CollectionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(IndexMap::new()),
        }
    }

    /// Registers a new collection.
    ///
    /// Names are unique; creating an existing collection fails with
    /// `CollectionExists` rather than being idempotent.
    pub fn create(&self, name: &str) -> CoreResult<CollectionInfo> {
        let mut collections = self.collections.write();
        if collections.contains_key(name) {
            return Err(CoreError::collection_exists(name));
        }
        let handle = Arc::new(CollectionHandle::new(name));
        let info = handle.info();
        collections.insert(name.to_string(), handle);
        debug!(collection = name, "collection created");
        Ok(info)
    }

    /// Resolves a collection name to its handle.
    pub fn get(&self, name: &str) -> CoreResult<Arc<CollectionHandle>> {
        self.collections
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::collection_not_found(name))
    }

    /// Resolves a collection, creating it when absent.
    ///
    /// Document write paths funnel through this so that an insert never
    /// fails solely because the collection is new.
    pub fn get_or_create(&self, name: &str) -> Arc<CollectionHandle> {
        if let Some(handle) = self.collections.read().get(name) {
            return Arc::clone(handle);
        }
        let mut collections = self.collections.write();
        let handle = collections
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(collection = name, "collection auto-created on write");
                Arc::new(CollectionHandle::new(name))
            });
        Arc::clone(handle)
    }

    /// Returns metadata for one collection.
    pub fn info(&self, name: &str) -> CoreResult<CollectionInfo> {
        Ok(self.get(name)?.info())
    }

    /// Returns metadata for every registered collection, in creation
    /// order. The listing is stable and complete.
    pub fn list(&self) -> Vec<CollectionInfo> {
        self.collections
            .read()
            .values()
            .map(|handle| handle.info())
            .collect()
    }

    /// Deletes a collection and, transitively, every document it owns.
    ///
    /// The table is torn down while the registry write lock is still
    /// held, so a concurrent reader either sees the collection with all
    /// its documents or neither. This is the only cascading operation
    /// in the store.
    pub fn delete(&self, name: &str) -> CoreResult<()> {
        let mut collections = self.collections.write();
        let handle = collections
            .shift_remove(name)
            .ok_or_else(|| CoreError::collection_not_found(name))?;
        let mut table = handle.table.write();
        let dropped = table.len();
        table.clear();
        debug!(collection = name, documents = dropped, "collection deleted");
        Ok(())
    }

    /// Returns true if the named collection is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    /// Number of registered collections.
    pub fn len(&self) -> usize {
        self.collections.read().len()
    }

    /// Returns true if no collections are registered.
    pub fn is_empty(&self) -> bool {
        self.collections.read().is_empty()
    }

    /// Aggregate counts for the whole store.
    pub fn stats(&self) -> StoreStats {
        let collections = self.collections.read();
        StoreStats {
            collections: collections.len(),
            documents: collections.values().map(|handle| handle.len()).sum(),
        }
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRegistry")
            .field("collections", &self.len())
            .finish()
    }
}
