//! Document records and identifiers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a document.
///
/// IDs are uuid-v4 backed, rendered as 32 lowercase hex characters.
/// They are:
/// - Globally unique (stronger than the required per-collection uniqueness)
/// - Immutable once assigned
/// - Never reused
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generates a fresh document ID.
    ///
    /// Safe to call from concurrent insert paths; generation is
    /// stateless and cannot fail.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an ID string received from a caller.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single schemaless document.
///
/// The payload is an opaque JSON value so arbitrary client-supplied
/// shapes round-trip losslessly, including nested objects, arrays, and
/// mixed value types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Collection-scoped unique identifier, assigned at creation.
    pub id: DocumentId,
    /// Name of the owning collection. A lookup relation, not an
    /// ownership edge; the `(collection, id)` pair is stable for the
    /// document's lifetime.
    pub collection: String,
    /// The client-supplied payload, preserved as-is.
    pub data: Value,
    /// Creation time. Never changes after insert.
    pub created_at: DateTime<Utc>,
    /// Bumped on every full replace.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a new document with a generated ID and current timestamps.
    pub(crate) fn new(collection: &str, data: Value) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            collection: collection.to_string(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the entire payload and bumps `updated_at`.
    ///
    /// `updated_at` must strictly increase even when the clock has not
    /// advanced past the previous value (coarse clock resolution).
    pub(crate) fn replace_data(&mut self, data: Value) {
        let mut now = Utc::now();
        if now <= self.updated_at {
            now = self.updated_at + Duration::nanoseconds(1);
        }
        self.data = data;
        self.updated_at = now;
    }
}
