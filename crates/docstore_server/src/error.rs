//! Error types for the command interface.

use docstore_core::CoreError;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors surfaced by the command interface.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request body was not valid JSON of the expected shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Storage core error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServerError::Internal(_))
    }

    /// HTTP-style status code for this error.
    ///
    /// Errors must be distinguishable by status code alone: 404 for
    /// missing entities, 409 for name collisions, 400 for bad input.
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::InvalidRequest(_) => 400,
            ServerError::Core(err) if err.is_not_found() => 404,
            ServerError::Core(CoreError::CollectionExists { .. }) => 409,
            ServerError::Core(_) => 400,
            ServerError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::InvalidRequest(_) => "INVALID_JSON",
            ServerError::Core(CoreError::CollectionNotFound { .. }) => "COLLECTION_NOT_FOUND",
            ServerError::Core(CoreError::DocumentNotFound { .. }) => "DOCUMENT_NOT_FOUND",
            ServerError::Core(CoreError::CollectionExists { .. }) => "COLLECTION_EXISTS",
            ServerError::Core(CoreError::MalformedInput { .. }) => "INVALID_JSON",
            ServerError::Core(CoreError::InvalidPagination { .. }) => "INVALID_QUERY",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ServerError::InvalidRequest("bad".into()).status_code(), 400);
        assert_eq!(
            ServerError::from(CoreError::collection_not_found("x")).status_code(),
            404
        );
        assert_eq!(
            ServerError::from(CoreError::document_not_found("x", "y")).status_code(),
            404
        );
        assert_eq!(
            ServerError::from(CoreError::collection_exists("x")).status_code(),
            409
        );
        assert_eq!(
            ServerError::from(CoreError::malformed_input("x")).status_code(),
            400
        );
        assert_eq!(
            ServerError::from(CoreError::invalid_pagination("x")).status_code(),
            400
        );
        assert_eq!(ServerError::Internal("oops".into()).status_code(), 500);
    }

    #[test]
    fn error_classification() {
        assert!(ServerError::InvalidRequest("bad".into()).is_client_error());
        assert!(!ServerError::Internal("oops".into()).is_client_error());
    }

    #[test]
    fn error_codes() {
        assert_eq!(
            ServerError::from(CoreError::collection_exists("x")).code(),
            "COLLECTION_EXISTS"
        );
        assert_eq!(ServerError::InvalidRequest("bad".into()).code(), "INVALID_JSON");
    }
}
