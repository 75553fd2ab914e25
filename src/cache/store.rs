//! Cache Store Module
//!
//! Namespaced, TTL-bound cache over a [`Storage`] backing, with a kill switch
//! and request statistics.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::{
    current_timestamp_ms, CacheCategory, CacheConfig, CacheEntry, CacheKey, CacheStats,
    CACHE_NAMESPACE,
};
use crate::error::StorageError;
use crate::storage::Storage;

// == Cache Store ==
/// Persistent cache with lazy TTL expiry.
///
/// Expired entries are removed when read; there is no background sweep.
pub struct CacheStore {
    /// Persistence backing, possibly shared with unrelated data
    storage: Arc<dyn Storage>,
    /// Enabled flag and counters
    config: CacheConfig,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("config", &self.config)
            .finish()
    }
}

impl CacheStore {
    // == Constructor ==
    /// Opens a store over `storage`, restoring persisted flags and counters.
    pub fn open(storage: Arc<dyn Storage>, development_mode: bool) -> Self {
        let config = CacheConfig::load(storage.as_ref(), development_mode);
        Self { storage, config }
    }

    pub fn development_mode(&self) -> bool {
        self.config.development_mode()
    }

    // == Enabled Flag ==
    /// Returns whether the cache currently serves and stores data.
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled(self.storage.as_ref())
    }

    /// Turns the cache on or off and persists the choice.
    pub fn set_enabled(&self, enabled: bool) -> Result<(), StorageError> {
        self.config.set_enabled(self.storage.as_ref(), enabled)?;
        info!("Cache {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    // == Get ==
    /// Retrieves a cached payload.
    ///
    /// Returns None when disabled, missing, expired (the entry is removed) or
    /// unreadable (the entry is kept). Never touches the counters.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        if !self.is_enabled() {
            debug!("Cache disabled - not reading {}", key);
            return None;
        }

        let raw = self.storage.get_item(key.as_str())?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Corrupt cache entry {}: {}", key, err);
                return None;
            }
        };

        if entry.is_expired_at(current_timestamp_ms()) {
            debug!("Cache entry {} expired, removing", key);
            self.storage.remove_item(key.as_str());
            return None;
        }

        match serde_json::from_value(entry.payload) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!("Cache entry {} has unexpected shape: {}", key, err);
                None
            }
        }
    }

    // == Put ==
    /// Stores a payload, overwriting any previous entry. No-op when disabled.
    pub fn put<T: Serialize + ?Sized>(&self, key: &CacheKey, payload: &T) -> Result<(), StorageError> {
        if !self.is_enabled() {
            debug!("Cache disabled - not storing {}", key);
            return Ok(());
        }

        let entry = CacheEntry::new(serde_json::to_value(payload)?);
        let raw = serde_json::to_string(&entry)?;
        self.storage.set_item(key.as_str(), &raw)
    }

    // == Clear All ==
    /// Removes every namespaced entry and nothing else.
    ///
    /// Returns the number of entries removed.
    pub fn clear_all(&self) -> usize {
        let keys = self.namespaced_keys();
        for key in &keys {
            self.storage.remove_item(key);
        }
        info!("Cache cleared: removed {} entries", keys.len());
        keys.len()
    }

    // == Counters ==
    /// Counts one gateway request, regardless of the enabled flag.
    pub fn record_request(&self) -> Result<u64, StorageError> {
        self.config.bump_requests(self.storage.as_ref())
    }

    /// Counts one request answered from the cache.
    pub fn record_hit(&self) -> Result<u64, StorageError> {
        self.config.bump_hits(self.storage.as_ref())
    }

    // == Stats ==
    /// Returns current statistics; entry counts are scanned live.
    pub fn stats(&self) -> CacheStats {
        let keys = self.namespaced_keys();
        let list_prefix = CacheCategory::List.prefix();
        let details_prefix = CacheCategory::Details.prefix();

        CacheStats {
            total_requests: self.config.total_requests(self.storage.as_ref()),
            cache_hits: self.config.cache_hits(self.storage.as_ref()),
            items_in_cache: keys.len(),
            lists_count: keys.iter().filter(|k| k.starts_with(&list_prefix)).count(),
            details_count: keys.iter().filter(|k| k.starts_with(&details_prefix)).count(),
            enabled: self.is_enabled(),
            development_mode: self.development_mode(),
        }
    }

    /// Number of namespaced entries currently persisted.
    pub fn items_in_cache(&self) -> usize {
        self.namespaced_keys().len()
    }

    fn namespaced_keys(&self) -> Vec<String> {
        self.storage
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(CACHE_NAMESPACE))
            .collect()
    }
}
