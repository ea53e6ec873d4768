//! Store statistics.

use serde::Serialize;

/// Aggregate counts for the whole store.
///
/// Computed on demand from the registry; cheap relative to the small
/// per-collection counters it sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of registered collections.
    pub collections: usize,
    /// Total number of documents across all collections.
    pub documents: usize,
}
