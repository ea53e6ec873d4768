//! # Docstore Server
//!
//! Command interface over the `docstore_core` engine.
//!
//! This crate provides:
//! - Typed commands, one per externally observable operation
//! - Request handlers that decode raw JSON bodies and validate
//!   pagination before touching the store
//! - A `status`/`data`/`error` response envelope with HTTP-style
//!   status codes (200/201/400/404/409/500)
//! - A health reporter (status, version, uptime)
//!
//! # Architecture
//!
//! The server is transport-agnostic. In a real application you would
//! expose HTTP routes that build [`Command`]s and render the returned
//! [`ApiReply`]s:
//!
//! ```
//! use docstore_server::{Command, ServerConfig, StoreServer};
//!
//! let server = StoreServer::new(ServerConfig::default());
//!
//! let reply = server.handle(Command::CreateCollection {
//!     name: "users".to_string(),
//! });
//! assert_eq!(reply.status_code, 201);
//!
//! let reply = server.handle(Command::CreateDocument {
//!     collection: "users".to_string(),
//!     body: br#"{"name": "Ann", "age": 30}"#.to_vec(),
//! });
//! assert_eq!(reply.status_code, 201);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handler;
mod health;
mod response;
mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{HandlerContext, PageParams, RequestHandler};
pub use health::{HealthReporter, HealthStatus};
pub use response::{ApiReply, ApiResponse, BulkReport, CollectionList, Deleted, DocumentPage, ErrorInfo};
pub use server::{Command, StoreServer};
