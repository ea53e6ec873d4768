//! Store server facade and command dispatch.

use crate::config::ServerConfig;
use crate::handler::{HandlerContext, PageParams, RequestHandler};
use crate::response::ApiReply;
use docstore_core::{CollectionRegistry, StoreStats};
use std::sync::Arc;

/// A command addressed to the store.
///
/// This is the abstract interface a transport layer translates inbound
/// requests into: one variant per externally observable operation.
/// Bodies stay raw bytes so that JSON decoding (and its failure mode)
/// happens inside the handlers, identically for every transport.
#[derive(Debug, Clone)]
pub enum Command {
    /// Service health check.
    Health,
    /// Create a collection by name.
    CreateCollection {
        /// Collection name.
        name: String,
    },
    /// List all collections.
    ListCollections,
    /// Fetch one collection descriptor.
    GetCollection {
        /// Collection name.
        name: String,
    },
    /// Delete a collection and everything it owns.
    DeleteCollection {
        /// Collection name.
        name: String,
    },
    /// Create a document from a raw JSON body.
    CreateDocument {
        /// Target collection.
        collection: String,
        /// Raw JSON request body.
        body: Vec<u8>,
    },
    /// Fetch a document.
    GetDocument {
        /// Target collection.
        collection: String,
        /// Document ID.
        id: String,
    },
    /// Replace a document's entire payload.
    ReplaceDocument {
        /// Target collection.
        collection: String,
        /// Document ID.
        id: String,
        /// Raw JSON request body.
        body: Vec<u8>,
    },
    /// Delete a document.
    DeleteDocument {
        /// Target collection.
        collection: String,
        /// Document ID.
        id: String,
    },
    /// List documents with pagination.
    ListDocuments {
        /// Target collection.
        collection: String,
        /// Pagination parameters.
        page: PageParams,
    },
    /// Bulk-insert a JSON array body.
    BulkInsert {
        /// Target collection.
        collection: String,
        /// Raw JSON array body.
        body: Vec<u8>,
    },
    /// Ingest an uploaded file containing a JSON array.
    UploadIngest {
        /// Target collection.
        collection: String,
        /// Raw file content.
        file: Vec<u8>,
    },
}

/// The document store server.
///
/// Wraps the storage core behind the command interface. In a real
/// deployment an HTTP layer would parse routes into [`Command`]s, call
/// [`StoreServer::handle`], and render the returned [`ApiReply`] as
/// status code plus JSON body.
///
/// # Example
///
/// ```
/// use docstore_server::{Command, ServerConfig, StoreServer};
///
/// let server = StoreServer::new(ServerConfig::default());
/// let reply = server.handle(Command::Health);
/// assert_eq!(reply.status_code, 200);
/// ```
pub struct StoreServer {
    handler: RequestHandler,
    context: Arc<HandlerContext>,
}

impl StoreServer {
    /// Creates a server with a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        let context = Arc::new(HandlerContext::new(config));
        let handler = RequestHandler::new(Arc::clone(&context));
        Self { handler, context }
    }

    /// Creates a server over an existing registry.
    pub fn with_registry(config: ServerConfig, registry: Arc<CollectionRegistry>) -> Self {
        let context = Arc::new(HandlerContext::with_registry(config, registry));
        let handler = RequestHandler::new(Arc::clone(&context));
        Self { handler, context }
    }

    /// Dispatches a command to the matching handler.
    ///
    /// Never panics and never returns a transport-level error: every
    /// failure becomes an error envelope with the appropriate status
    /// code.
    pub fn handle(&self, command: Command) -> ApiReply {
        let result = match command {
            Command::Health => self.handler.handle_health(),
            Command::CreateCollection { name } => self.handler.handle_create_collection(&name),
            Command::ListCollections => self.handler.handle_list_collections(),
            Command::GetCollection { name } => self.handler.handle_get_collection(&name),
            Command::DeleteCollection { name } => self.handler.handle_delete_collection(&name),
            Command::CreateDocument { collection, body } => {
                self.handler.handle_create_document(&collection, &body)
            }
            Command::GetDocument { collection, id } => {
                self.handler.handle_get_document(&collection, &id)
            }
            Command::ReplaceDocument {
                collection,
                id,
                body,
            } => self
                .handler
                .handle_replace_document(&collection, &id, &body),
            Command::DeleteDocument { collection, id } => {
                self.handler.handle_delete_document(&collection, &id)
            }
            Command::ListDocuments { collection, page } => {
                self.handler.handle_list_documents(&collection, page)
            }
            Command::BulkInsert { collection, body } => {
                self.handler.handle_bulk_insert(&collection, &body)
            }
            Command::UploadIngest { collection, file } => {
                self.handler.handle_upload(&collection, &file)
            }
        };
        result.unwrap_or_else(|err| ApiReply::error(&err))
    }

    /// Aggregate counts for the whole store.
    pub fn stats(&self) -> StoreStats {
        self.context.registry.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd_create_doc(collection: &str, body: &str) -> Command {
        Command::CreateDocument {
            collection: collection.to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn server_lifecycle() {
        let server = StoreServer::new(ServerConfig::default());
        let stats = server.stats();
        assert_eq!(stats.collections, 0);
        assert_eq!(stats.documents, 0);
    }

    #[test]
    fn dispatch_health() {
        let server = StoreServer::new(ServerConfig::default());
        let reply = server.handle(Command::Health);
        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.data().unwrap()["status"], "ok");
    }

    #[test]
    fn dispatch_errors_become_envelopes() {
        let server = StoreServer::new(ServerConfig::default());
        let reply = server.handle(Command::GetCollection {
            name: "missing".to_string(),
        });
        assert_eq!(reply.status_code, 404);
        assert_eq!(reply.body.status, "error");
    }

    #[test]
    fn dispatch_full_flow() {
        let server = StoreServer::new(ServerConfig::default());

        let reply = server.handle(Command::CreateCollection {
            name: "users".to_string(),
        });
        assert_eq!(reply.status_code, 201);

        let reply = server.handle(cmd_create_doc("users", r#"{"name": "Ann"}"#));
        assert_eq!(reply.status_code, 201);

        assert_eq!(server.stats().documents, 1);
    }

    #[test]
    fn shared_registry() {
        let registry = Arc::new(CollectionRegistry::new());
        let server = StoreServer::with_registry(ServerConfig::default(), Arc::clone(&registry));

        server.handle(cmd_create_doc("users", r#"{"n": 1}"#));

        // Visible through the registry directly.
        assert_eq!(registry.get("users").unwrap().len(), 1);
    }
}
