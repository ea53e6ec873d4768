//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the document store server.
///
/// The bind address, connection, and timeout knobs are consumed by the
/// transport layer that embeds this crate; the upload cap and page
/// defaults are enforced by the handlers themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Maximum concurrent connections.
    pub max_connections: usize,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// Page size used when a listing request omits `limit`.
    pub default_page_limit: usize,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            max_connections: 1000,
            request_timeout: Duration::from_secs(30),
            max_upload_bytes: 10 << 20,
            default_page_limit: 100,
        }
    }

    /// Sets the maximum concurrent connections.
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the maximum accepted upload size.
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Sets the default page size for document listings.
    pub fn with_default_page_limit(mut self, limit: usize) -> Self {
        self.default_page_limit = limit;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.max_connections, 1000);
        assert_eq!(config.default_page_limit, 100);
        assert_eq!(config.max_upload_bytes, 10 << 20);
    }

    #[test]
    fn config_builder() {
        let config = ServerConfig::new("0.0.0.0:9000".parse().unwrap())
            .with_max_connections(500)
            .with_max_upload_bytes(1024)
            .with_default_page_limit(25);

        assert_eq!(config.max_connections, 500);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.default_page_limit, 25);
    }
}
