//! Process-wide cache configuration: the enabled flag and the request
//! counters, persisted next to the cache entries.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::StorageError;
use crate::storage::Storage;

// Outside CACHE_NAMESPACE so clearing entries keeps flags and counters.
pub const ENABLED_KEY: &str = "pokemon-config:cache_enabled";
pub const TOTAL_REQUESTS_KEY: &str = "pokemon-config:total_requests";
pub const CACHE_HITS_KEY: &str = "pokemon-config:cache_hits";

// == Cache Config ==
/// Enabled flag and counters, created once per store and mutated only
/// through [`CacheStore`](crate::cache::CacheStore).
#[derive(Debug)]
pub struct CacheConfig {
    development_mode: bool,
    enabled: AtomicBool,
    total_requests: AtomicU64,
    cache_hits: AtomicU64,
}

impl CacheConfig {
    /// Loads persisted state from `storage`.
    ///
    /// Production builds always start enabled; development builds restore
    /// the last persisted flag.
    pub fn load(storage: &dyn Storage, development_mode: bool) -> Self {
        let enabled = if development_mode {
            read_flag(storage).unwrap_or(true)
        } else {
            true
        };

        Self {
            development_mode,
            enabled: AtomicBool::new(enabled),
            total_requests: AtomicU64::new(read_counter(storage, TOTAL_REQUESTS_KEY).unwrap_or(0)),
            cache_hits: AtomicU64::new(read_counter(storage, CACHE_HITS_KEY).unwrap_or(0)),
        }
    }

    pub fn development_mode(&self) -> bool {
        self.development_mode
    }

    /// Current flag. Development builds re-read the persisted value first so
    /// toggles made by another store over the same backing are observed.
    pub fn is_enabled(&self, storage: &dyn Storage) -> bool {
        if self.development_mode {
            if let Some(flag) = read_flag(storage) {
                self.enabled.store(flag, Ordering::SeqCst);
            }
        }
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, storage: &dyn Storage, enabled: bool) -> Result<(), StorageError> {
        self.enabled.store(enabled, Ordering::SeqCst);
        storage.set_item(ENABLED_KEY, if enabled { "true" } else { "false" })
    }

    pub fn bump_requests(&self, storage: &dyn Storage) -> Result<u64, StorageError> {
        bump(storage, TOTAL_REQUESTS_KEY, &self.total_requests)
    }

    pub fn bump_hits(&self, storage: &dyn Storage) -> Result<u64, StorageError> {
        bump(storage, CACHE_HITS_KEY, &self.cache_hits)
    }

    pub fn total_requests(&self, storage: &dyn Storage) -> u64 {
        current(storage, TOTAL_REQUESTS_KEY, &self.total_requests)
    }

    pub fn cache_hits(&self, storage: &dyn Storage) -> u64 {
        current(storage, CACHE_HITS_KEY, &self.cache_hits)
    }
}

fn read_flag(storage: &dyn Storage) -> Option<bool> {
    storage.get_item(ENABLED_KEY).map(|raw| raw == "true")
}

fn read_counter(storage: &dyn Storage, key: &str) -> Option<u64> {
    storage.get_item(key)?.trim().parse().ok()
}

fn current(storage: &dyn Storage, key: &str, counter: &AtomicU64) -> u64 {
    let persisted = read_counter(storage, key).unwrap_or(0);
    persisted.max(counter.load(Ordering::SeqCst))
}

// Never moves backwards, even if the persisted value was wiped.
fn bump(storage: &dyn Storage, key: &str, counter: &AtomicU64) -> Result<u64, StorageError> {
    let next = current(storage, key, counter) + 1;
    storage.set_item(key, &next.to_string())?;
    counter.store(next, Ordering::SeqCst);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_production_ignores_persisted_flag() {
        let storage = MemoryStorage::new();
        storage.set_item(ENABLED_KEY, "false").unwrap();

        let config = CacheConfig::load(&storage, false);
        assert!(config.is_enabled(&storage));
    }

    #[test]
    fn test_development_restores_persisted_flag() {
        let storage = MemoryStorage::new();
        storage.set_item(ENABLED_KEY, "false").unwrap();

        let config = CacheConfig::load(&storage, true);
        assert!(!config.is_enabled(&storage));

        storage.set_item(ENABLED_KEY, "true").unwrap();
        assert!(config.is_enabled(&storage));
    }

    #[test]
    fn test_counters_resume_from_storage() {
        let storage = MemoryStorage::new();
        storage.set_item(TOTAL_REQUESTS_KEY, "41").unwrap();

        let config = CacheConfig::load(&storage, false);
        assert_eq!(config.bump_requests(&storage).unwrap(), 42);
        assert_eq!(storage.get_item(TOTAL_REQUESTS_KEY).as_deref(), Some("42"));
    }

    #[test]
    fn test_counter_survives_wiped_value() {
        let storage = MemoryStorage::new();
        let config = CacheConfig::load(&storage, false);
        config.bump_hits(&storage).unwrap();
        config.bump_hits(&storage).unwrap();
        storage.remove_item(CACHE_HITS_KEY);

        assert_eq!(config.bump_hits(&storage).unwrap(), 3);
    }

    #[test]
    fn test_garbage_counter_reads_as_zero() {
        let storage = MemoryStorage::new();
        storage.set_item(CACHE_HITS_KEY, "lots").unwrap();

        let config = CacheConfig::load(&storage, false);
        assert_eq!(config.cache_hits(&storage), 0);
    }
}
