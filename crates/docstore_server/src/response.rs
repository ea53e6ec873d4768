//! Response envelope and payload types.
//!
//! Every reply is a JSON envelope with a `status` marker plus either a
//! `data` field (success) or an `error` field. Status codes alone are
//! enough to distinguish outcomes; the envelope carries detail.

use crate::error::ServerError;
use docstore_core::{CollectionInfo, Document};
use serde::Serialize;
use serde_json::Value;

/// Standard response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    /// `"success"` or `"error"`.
    pub status: &'static str,
    /// Payload for successful operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Details for failed operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Error details carried in the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// Machine-readable error code, e.g. `COLLECTION_NOT_FOUND`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// A complete reply from the command interface: a status code plus the
/// JSON body a transport layer would write out.
#[derive(Debug, Clone, Serialize)]
pub struct ApiReply {
    /// HTTP-style status code (200, 201, 400, 404, 409, 500).
    pub status_code: u16,
    /// The response envelope.
    pub body: ApiResponse,
}

impl ApiReply {
    /// Builds a success reply with the given payload.
    pub fn success<T: Serialize>(status_code: u16, data: &T) -> Self {
        // Our payload types serialize infallibly; Null is the safe
        // fallback rather than panicking in a response path.
        let data = serde_json::to_value(data).unwrap_or(Value::Null);
        Self {
            status_code,
            body: ApiResponse {
                status: "success",
                data: Some(data),
                error: None,
            },
        }
    }

    /// Builds an error reply from a typed server error.
    pub fn error(err: &ServerError) -> Self {
        Self {
            status_code: err.status_code(),
            body: ApiResponse {
                status: "error",
                data: None,
                error: Some(ErrorInfo {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }

    /// Returns true for 2xx replies.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns the `data` field of the envelope, if any.
    pub fn data(&self) -> Option<&Value> {
        self.body.data.as_ref()
    }
}

/// Payload for the collection listing operation.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionList {
    /// Number of collections.
    pub total: usize,
    /// All registered collections, in creation order.
    pub collections: Vec<CollectionInfo>,
}

/// Payload for the paginated document listing operation.
///
/// `limit` and `offset` echo the request exactly, regardless of how
/// many documents came back.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPage {
    /// Total number of documents in the collection.
    pub total: usize,
    /// The requested page size, echoed back.
    pub limit: usize,
    /// The requested start offset, echoed back.
    pub offset: usize,
    /// The documents in this page, in stable insertion order.
    pub documents: Vec<Document>,
}

/// Payload for bulk insert and file ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct BulkReport {
    /// Summary message.
    pub message: String,
    /// Number of documents created.
    pub count: usize,
    /// The created records, each with its assigned ID.
    pub documents: Vec<Document>,
}

/// Payload confirming a deletion.
#[derive(Debug, Clone, Serialize)]
pub struct Deleted {
    /// Confirmation message.
    pub message: String,
}

impl Deleted {
    /// Confirmation for a deleted collection.
    pub fn collection() -> Self {
        Self {
            message: "Collection deleted successfully".to_string(),
        }
    }

    /// Confirmation for a deleted document.
    pub fn document() -> Self {
        Self {
            message: "Document deleted successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore_core::CoreError;

    #[test]
    fn success_envelope_shape() {
        let reply = ApiReply::success(200, &serde_json::json!({"k": 1}));
        assert!(reply.is_success());

        let encoded = serde_json::to_value(&reply.body).unwrap();
        assert_eq!(encoded["status"], "success");
        assert_eq!(encoded["data"]["k"], 1);
        assert!(encoded.get("error").is_none());
    }

    #[test]
    fn error_envelope_shape() {
        let err = ServerError::from(CoreError::collection_not_found("users"));
        let reply = ApiReply::error(&err);
        assert_eq!(reply.status_code, 404);
        assert!(!reply.is_success());

        let encoded = serde_json::to_value(&reply.body).unwrap();
        assert_eq!(encoded["status"], "error");
        assert_eq!(encoded["error"]["code"], "COLLECTION_NOT_FOUND");
        assert!(encoded.get("data").is_none());
    }
}
