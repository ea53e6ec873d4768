//! Error types for the document store core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in document store core operations.
///
/// Every failure is resolved at the operation boundary; no operation
/// leaves a table or the registry in an inconsistent state on error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Collection not found.
    #[error("collection not found: {name}")]
    CollectionNotFound {
        /// Name of the collection.
        name: String,
    },

    /// Collection name already registered.
    #[error("collection already exists: {name}")]
    CollectionExists {
        /// Name of the collection.
        name: String,
    },

    /// Document not found in the collection.
    #[error("document not found: {id} in collection {collection}")]
    DocumentNotFound {
        /// The collection searched.
        collection: String,
        /// The document ID that was not found.
        id: String,
    },

    /// Input was not valid JSON of the expected shape.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Description of the parse failure.
        message: String,
    },

    /// Pagination parameters out of range.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },
}

impl CoreError {
    /// Creates a collection-not-found error.
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Self::CollectionNotFound { name: name.into() }
    }

    /// Creates a collection-exists error.
    pub fn collection_exists(name: impl Into<String>) -> Self {
        Self::CollectionExists { name: name.into() }
    }

    /// Creates a document-not-found error.
    pub fn document_not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DocumentNotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Creates a malformed-input error.
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Creates an invalid-pagination error.
    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination {
            message: message.into(),
        }
    }

    /// Returns true if this error means a referenced entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CollectionNotFound { .. } | Self::DocumentNotFound { .. }
        )
    }
}
