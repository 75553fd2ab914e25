//! Cache Entry Module
//!
//! Defines the persisted envelope for a cached payload.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CACHE_TTL_MS;

// == Cache Entry ==
/// A cached payload and the moment it was stored.
///
/// Serialized as `{"data": ..., "timestamp": ...}` under its cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored payload, kept as opaque JSON
    #[serde(rename = "data")]
    pub payload: Value,
    /// Storage timestamp (Unix milliseconds)
    #[serde(rename = "timestamp")]
    pub stored_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps a payload stamped with the current time.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now`.
    ///
    /// Expired only once strictly more than the TTL has elapsed. Timestamps
    /// far in the past saturate instead of overflowing.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now.saturating_sub(self.stored_at) > CACHE_TTL_MS
    }

    /// Checks whether the entry is stale right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Age of the entry in milliseconds.
    pub fn age_ms(&self) -> i64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
