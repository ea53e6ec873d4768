//! Health reporting.

use serde::Serialize;
use std::time::Instant;

/// Snapshot of service health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Service version.
    pub version: String,
    /// Time since service start, rendered in whole seconds (`"42s"`).
    pub uptime: String,
}

/// Reports process status, version, and uptime.
///
/// Side-effect free; cannot fail. Uptime is measured from the moment
/// the reporter is constructed, which the server does at startup.
#[derive(Debug, Clone)]
pub struct HealthReporter {
    version: String,
    started: Instant,
}

impl HealthReporter {
    /// Creates a reporter; the uptime clock starts now.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            started: Instant::now(),
        }
    }

    /// Produces a health snapshot.
    pub fn report(&self) -> HealthStatus {
        HealthStatus {
            status: "ok",
            version: self.version.clone(),
            uptime: format!("{}s", self.started.elapsed().as_secs()),
        }
    }
}
