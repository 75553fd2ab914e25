//! Development tools
//!
//! Cache controls meant for a developer console. Only handed out when the
//! store runs in development mode.

use std::sync::Arc;

use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::error::StorageError;

const HELP: &str = "\
Pokédex cache development tools

  enable_cache()   enable the cache
  disable_cache()  disable the cache
  toggle_cache()   flip the cache on or off
  clear_cache()    remove every cached entry
  cache_stats()    show cache statistics
  help()           show this help
";

// == Dev Tools ==
#[derive(Debug, Clone)]
pub struct DevTools {
    cache: Arc<CacheStore>,
}

impl DevTools {
    /// Returns the tools for a development-mode store, None otherwise.
    pub fn attach(cache: &Arc<CacheStore>) -> Option<Self> {
        if !cache.development_mode() {
            return None;
        }
        info!("Development mode detected, cache dev tools available");
        Some(Self {
            cache: Arc::clone(cache),
        })
    }

    pub fn enable_cache(&self) -> Result<(), StorageError> {
        self.cache.set_enabled(true)
    }

    pub fn disable_cache(&self) -> Result<(), StorageError> {
        self.cache.set_enabled(false)
    }

    /// Flips the flag and returns the new state.
    pub fn toggle_cache(&self) -> Result<bool, StorageError> {
        let enabled = !self.cache.is_enabled();
        self.cache.set_enabled(enabled)?;
        Ok(enabled)
    }

    /// Returns the number of entries removed.
    pub fn clear_cache(&self) -> usize {
        self.cache.clear_all()
    }

    pub fn cache_stats(&self) -> CacheStats {
        let stats = self.cache.stats();
        info!(
            "Cache stats: requests={}, hits={}, items={}, enabled={}",
            stats.total_requests, stats.cache_hits, stats.items_in_cache, stats.enabled
        );
        stats
    }

    pub fn help(&self) -> &'static str {
        HELP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheKey;
    use crate::storage::MemoryStorage;

    fn store(development_mode: bool) -> Arc<CacheStore> {
        Arc::new(CacheStore::open(Arc::new(MemoryStorage::new()), development_mode))
    }

    #[test]
    fn test_not_available_in_production() {
        assert!(DevTools::attach(&store(false)).is_none());
    }

    #[test]
    fn test_toggle_and_clear() {
        let cache = store(true);
        let tools = DevTools::attach(&cache).unwrap();
        cache.put(&CacheKey::details(25), &"pikachu").unwrap();

        assert!(!tools.toggle_cache().unwrap());
        assert!(!cache.is_enabled());
        assert!(tools.toggle_cache().unwrap());

        assert_eq!(tools.clear_cache(), 1);
        assert_eq!(tools.cache_stats().items_in_cache, 0);
        assert!(tools.help().contains("toggle_cache"));
    }
}
