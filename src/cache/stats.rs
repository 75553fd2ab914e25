//! Cache Statistics Module
//!
//! Snapshot of request counters and the live cache contents.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Gateway requests recorded, cached or not
    pub total_requests: u64,
    /// Requests answered from the cache
    pub cache_hits: u64,
    /// Namespaced entries present at the time of the call
    pub items_in_cache: usize,
    /// Of which generation rosters
    pub lists_count: usize,
    /// Of which detail records
    pub details_count: usize,
    /// Whether the cache is serving data
    pub enabled: bool,
    /// Whether the store runs in development mode
    pub development_mode: bool,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns cache_hits / total_requests, or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }
}
