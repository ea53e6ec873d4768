//! # Docstore Core
//!
//! In-memory engine for a multi-collection, schemaless JSON document
//! store.
//!
//! This crate provides:
//! - Per-collection document tables with stable, insertion-ordered
//!   listing and offset/limit pagination
//! - A process-wide collection registry with cascading deletion
//! - A bulk/file ingestion coordinator that shares the single-insert
//!   path, so batch and single creation behave identically
//! - Typed errors resolved at every operation boundary
//!
//! The engine is deliberately transport-agnostic: it knows nothing
//! about HTTP. A server layer (see `docstore_server`) translates wire
//! requests into calls on [`CollectionRegistry`] and [`BulkLoader`].
//!
//! # Example
//!
//! ```
//! use docstore_core::CollectionRegistry;
//! use serde_json::json;
//!
//! let registry = CollectionRegistry::new();
//! let users = registry.get_or_create("users");
//!
//! let doc = users.insert(json!({"name": "Ann", "age": 30}));
//! assert_eq!(users.get(&doc.id).unwrap().data, json!({"name": "Ann", "age": 30}));
//!
//! registry.delete("users").unwrap();
//! assert!(registry.get("users").is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod error;
mod ingest;
mod registry;
mod stats;
mod table;

pub use document::{Document, DocumentId};
pub use error::{CoreError, CoreResult};
pub use ingest::{BulkLoader, IngestReport};
pub use registry::{CollectionHandle, CollectionInfo, CollectionRegistry};
pub use stats::StoreStats;
pub use table::DocumentTable;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
