//! Cache Module
//!
//! Persistent key/value caching with TTL expiration, an enable switch and
//! hit/request statistics.

mod config;
mod entry;
mod keys;
mod stats;
mod store;


// Re-export public types
pub use config::CacheConfig;
pub use entry::{current_timestamp_ms, CacheEntry};
pub use keys::{CacheCategory, CacheKey};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Time after which an entry is stale (24 hours)
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Prefix carried by every cache entry key
pub const CACHE_NAMESPACE: &str = "pokemon_";
