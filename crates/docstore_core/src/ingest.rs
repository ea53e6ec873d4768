//! Bulk insertion and file ingestion.

use crate::document::Document;
use crate::error::{CoreError, CoreResult};
use crate::registry::CollectionRegistry;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Result of a bulk or file ingestion run.
///
/// `count` always equals `documents.len()` and is at most the number of
/// input items; the two differ only when non-object items were skipped.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// Number of documents actually created.
    pub count: usize,
    /// The created records, in input order, each with its assigned ID.
    pub documents: Vec<Document>,
}

/// Funnels batches of raw JSON objects into a target collection.
///
/// Both entry points, array request bodies and uploaded files, converge
/// on the same per-item insert loop, which in turn uses the same table
/// insert primitive as single-document creation. Batch insertion
/// therefore behaves exactly like repeated single inserts: same ID
/// assignment, same timestamps, same auto-creation of the collection.
pub struct BulkLoader {
    registry: Arc<CollectionRegistry>,
}

impl BulkLoader {
    /// Creates a loader over a shared registry.
    pub fn new(registry: Arc<CollectionRegistry>) -> Self {
        Self { registry }
    }

    /// Inserts each object in `items` into `collection`, in input
    /// order, creating the collection if it does not exist yet.
    ///
    /// Items that are not JSON objects are skipped and excluded from
    /// the report rather than aborting the batch; past the parse stage
    /// ingestion favors maximal intake over rejection.
    pub fn bulk_insert(&self, collection: &str, items: Vec<Value>) -> IngestReport {
        let handle = self.registry.get_or_create(collection);
        let mut documents = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for item in items {
            if !item.is_object() {
                skipped += 1;
                continue;
            }
            documents.push(handle.insert(item));
        }
        if skipped > 0 {
            debug!(collection, skipped, "skipped non-object items in batch");
        }
        IngestReport {
            count: documents.len(),
            documents,
        }
    }

    /// Parses `bytes` as JSON and ingests the contents into
    /// `collection`.
    ///
    /// A parse failure aborts the whole operation with `MalformedInput`
    /// before anything is inserted. A top-level object is accepted as a
    /// batch of one; a top-level array goes through [`Self::bulk_insert`]
    /// with its skip-non-objects policy; any other top-level value is
    /// malformed.
    pub fn ingest_bytes(&self, collection: &str, bytes: &[u8]) -> CoreResult<IngestReport> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| CoreError::malformed_input(err.to_string()))?;

        let items = match value {
            Value::Array(items) => items,
            obj @ Value::Object(_) => vec![obj],
            other => {
                return Err(CoreError::malformed_input(format!(
                    "expected a JSON array or object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        Ok(self.bulk_insert(collection, items))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
