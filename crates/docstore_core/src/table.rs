//! Per-collection document table.

use crate::document::{Document, DocumentId};
use crate::error::{CoreError, CoreResult};
use indexmap::IndexMap;
use serde_json::Value;

/// Insertion-ordered table of documents for a single collection.
///
/// The table never rejects a payload for schema reasons; any JSON value
/// is stored verbatim. Listing is stable across repeated calls absent
/// mutation because the underlying map preserves insertion order.
///
/// `DocumentTable` itself is plain data; the owning
/// [`crate::CollectionHandle`] guards it with a lock so that same-ID
/// mutations serialize and list snapshots are self-consistent.
#[derive(Debug)]
pub struct DocumentTable {
    collection: String,
    documents: IndexMap<DocumentId, Document>,
}

impl DocumentTable {
    /// Creates an empty table for the named collection.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            documents: IndexMap::new(),
        }
    }

    /// Inserts a new document, assigning a fresh ID.
    ///
    /// Returns the full stored record. Cannot fail: the store is
    /// schemaless and the insert either fully commits or (on panic
    /// before the map insert) commits nothing.
    pub fn insert(&mut self, data: Value) -> Document {
        let doc = Document::new(&self.collection, data);
        self.documents.insert(doc.id.clone(), doc.clone());
        doc
    }

    /// Fetches a document by ID.
    pub fn get(&self, id: &DocumentId) -> CoreResult<Document> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::document_not_found(&self.collection, id.as_str()))
    }

    /// Replaces the entire payload of an existing document.
    ///
    /// `id` and `created_at` are unchanged; `updated_at` strictly
    /// increases. No partial/merge semantics.
    pub fn replace(&mut self, id: &DocumentId, data: Value) -> CoreResult<Document> {
        let doc = self
            .documents
            .get_mut(id)
            .ok_or_else(|| CoreError::document_not_found(&self.collection, id.as_str()))?;
        doc.replace_data(data);
        Ok(doc.clone())
    }

    /// Removes a document. Subsequent `get` on the same ID fails with
    /// `DocumentNotFound`.
    pub fn remove(&mut self, id: &DocumentId) -> CoreResult<()> {
        // shift_remove keeps the remaining documents in insertion order.
        self.documents
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::document_not_found(&self.collection, id.as_str()))
    }

    /// Returns up to `limit` documents starting at `offset`, plus the
    /// total count in the table.
    ///
    /// An `offset` beyond the table size or a `limit` of zero yields an
    /// empty page, never an error. Negative parameters are rejected one
    /// layer up, before the table is touched.
    pub fn page(&self, limit: usize, offset: usize) -> (Vec<Document>, usize) {
        let total = self.documents.len();
        let docs = self
            .documents
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        (docs, total)
    }

    /// Returns the number of documents in the table.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the table holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Removes every document. Used by cascading collection deletion.
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// Name of the owning collection.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}
