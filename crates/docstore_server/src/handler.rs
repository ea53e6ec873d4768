//! Request handlers for the document store operations.
//!
//! Each handler decodes raw request bodies, validates query
//! parameters, calls into the storage core, and wraps the outcome in
//! an [`ApiReply`]. Raw JSON is decoded here so that an unparseable
//! body fails at this layer, before the store is touched.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::health::HealthReporter;
use crate::response::{ApiReply, BulkReport, CollectionList, Deleted, DocumentPage};
use docstore_core::{BulkLoader, CollectionRegistry, CoreError, DocumentId};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Pagination parameters as they arrive from the query string.
///
/// Values are kept signed so that negative inputs reach validation
/// instead of being mangled at parse time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParams {
    /// Requested page size; `None` means the configured default.
    pub limit: Option<i64>,
    /// Requested start offset; `None` means zero.
    pub offset: Option<i64>,
}

impl PageParams {
    /// Builds parameters with both values set.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Shared state for request handling.
pub struct HandlerContext {
    /// Server configuration.
    pub config: ServerConfig,
    /// The collection registry (shared across all handlers).
    pub registry: Arc<CollectionRegistry>,
    /// Bulk/file ingestion coordinator over the same registry.
    pub loader: BulkLoader,
    /// Health reporter; its uptime clock starts with the context.
    pub health: HealthReporter,
}

impl HandlerContext {
    /// Creates a context with a fresh, empty registry.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_registry(config, Arc::new(CollectionRegistry::new()))
    }

    /// Creates a context over an existing registry.
    pub fn with_registry(config: ServerConfig, registry: Arc<CollectionRegistry>) -> Self {
        let loader = BulkLoader::new(Arc::clone(&registry));
        Self {
            config,
            registry,
            loader,
            health: HealthReporter::new(env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Handler for document store requests.
pub struct RequestHandler {
    context: Arc<HandlerContext>,
}

impl RequestHandler {
    /// Creates a new request handler.
    pub fn new(context: Arc<HandlerContext>) -> Self {
        Self { context }
    }

    /// Health check. Cannot fail.
    pub fn handle_health(&self) -> ServerResult<ApiReply> {
        Ok(ApiReply::success(200, &self.context.health.report()))
    }

    /// Creates a collection. Fails with 409 if the name is taken.
    pub fn handle_create_collection(&self, name: &str) -> ServerResult<ApiReply> {
        if name.is_empty() {
            return Err(ServerError::InvalidRequest(
                "collection name cannot be empty".to_string(),
            ));
        }
        let info = self.context.registry.create(name)?;
        debug!(collection = name, "created collection");
        Ok(ApiReply::success(201, &info))
    }

    /// Lists every collection.
    pub fn handle_list_collections(&self) -> ServerResult<ApiReply> {
        let collections = self.context.registry.list();
        let list = CollectionList {
            total: collections.len(),
            collections,
        };
        Ok(ApiReply::success(200, &list))
    }

    /// Fetches a collection descriptor by name.
    pub fn handle_get_collection(&self, name: &str) -> ServerResult<ApiReply> {
        let info = self.context.registry.info(name)?;
        Ok(ApiReply::success(200, &info))
    }

    /// Deletes a collection and every document it owns.
    pub fn handle_delete_collection(&self, name: &str) -> ServerResult<ApiReply> {
        self.context.registry.delete(name)?;
        debug!(collection = name, "deleted collection");
        Ok(ApiReply::success(200, &Deleted::collection()))
    }

    /// Creates a document from a raw JSON body, creating the collection
    /// if it does not exist yet.
    pub fn handle_create_document(&self, collection: &str, body: &[u8]) -> ServerResult<ApiReply> {
        let data = parse_json_body(body)?;
        let doc = self.context.registry.get_or_create(collection).insert(data);
        debug!(collection, id = %doc.id, "created document");
        Ok(ApiReply::success(201, &doc))
    }

    /// Fetches a document by collection name and ID.
    pub fn handle_get_document(&self, collection: &str, id: &str) -> ServerResult<ApiReply> {
        let handle = self.context.registry.get(collection)?;
        let doc = handle.get(&DocumentId::from(id))?;
        Ok(ApiReply::success(200, &doc))
    }

    /// Replaces a document's entire payload from a raw JSON body.
    pub fn handle_replace_document(
        &self,
        collection: &str,
        id: &str,
        body: &[u8],
    ) -> ServerResult<ApiReply> {
        let data = parse_json_body(body)?;
        let handle = self.context.registry.get(collection)?;
        let doc = handle.replace(&DocumentId::from(id), data)?;
        debug!(collection, id, "replaced document");
        Ok(ApiReply::success(200, &doc))
    }

    /// Deletes a single document.
    pub fn handle_delete_document(&self, collection: &str, id: &str) -> ServerResult<ApiReply> {
        let handle = self.context.registry.get(collection)?;
        handle.remove(&DocumentId::from(id))?;
        debug!(collection, id, "deleted document");
        Ok(ApiReply::success(200, &Deleted::document()))
    }

    /// Lists documents with offset/limit pagination.
    ///
    /// Negative parameters are rejected here, before the table is
    /// touched; the reply echoes the effective `limit` and `offset`.
    pub fn handle_list_documents(
        &self,
        collection: &str,
        params: PageParams,
    ) -> ServerResult<ApiReply> {
        let (limit, offset) = self.resolve_page(params)?;
        let handle = self.context.registry.get(collection)?;
        let (documents, total) = handle.page(limit, offset);
        let page = DocumentPage {
            total,
            limit,
            offset,
            documents,
        };
        Ok(ApiReply::success(200, &page))
    }

    /// Bulk-inserts a JSON array body, creating the collection if
    /// absent.
    pub fn handle_bulk_insert(&self, collection: &str, body: &[u8]) -> ServerResult<ApiReply> {
        let items: Vec<Value> = serde_json::from_slice(body)
            .map_err(|err| ServerError::InvalidRequest(format!("invalid JSON array: {err}")))?;
        let report = self.context.loader.bulk_insert(collection, items);
        debug!(collection, count = report.count, "bulk insert");
        Ok(ApiReply::success(
            201,
            &BulkReport {
                message: "Documents created successfully".to_string(),
                count: report.count,
                documents: report.documents,
            },
        ))
    }

    /// Ingests an uploaded file containing a JSON array (or a single
    /// object). A parse failure aborts with nothing inserted.
    pub fn handle_upload(&self, collection: &str, file: &[u8]) -> ServerResult<ApiReply> {
        if file.len() > self.context.config.max_upload_bytes {
            return Err(ServerError::InvalidRequest(format!(
                "upload exceeds {} bytes",
                self.context.config.max_upload_bytes
            )));
        }
        let report = self.context.loader.ingest_bytes(collection, file)?;
        debug!(collection, count = report.count, "file ingested");
        Ok(ApiReply::success(
            201,
            &BulkReport {
                message: "File processed successfully".to_string(),
                count: report.count,
                documents: report.documents,
            },
        ))
    }

    fn resolve_page(&self, params: PageParams) -> ServerResult<(usize, usize)> {
        let limit = match params.limit {
            None => self.context.config.default_page_limit,
            Some(l) if l < 0 => {
                return Err(CoreError::invalid_pagination(format!(
                    "limit must be non-negative, got {l}"
                ))
                .into())
            }
            Some(l) => l as usize,
        };
        let offset = match params.offset {
            None => 0,
            Some(o) if o < 0 => {
                return Err(CoreError::invalid_pagination(format!(
                    "offset must be non-negative, got {o}"
                ))
                .into())
            }
            Some(o) => o as usize,
        };
        Ok((limit, offset))
    }
}

fn parse_json_body(body: &[u8]) -> ServerResult<Value> {
    serde_json::from_slice(body)
        .map_err(|err| ServerError::InvalidRequest(format!("invalid JSON body: {err}")))
}
