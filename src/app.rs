//! Application state
//!
//! Wires storage, cache, transport and gateway together from a [`Config`].

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::devtools::DevTools;
use crate::gateway::{PokemonGateway, ReqwestTransport};
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Everything a UI needs to call into the core.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheStore>,
    pub gateway: PokemonGateway,
}

impl AppState {
    /// Creates an AppState over an existing storage backing, using reqwest
    /// for network access.
    pub fn with_storage(config: &Config, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        let cache = Arc::new(CacheStore::open(storage, config.development_mode));
        let transport = ReqwestTransport::with_timeout(config.request_timeout())
            .context("failed to build HTTP client")?;
        let gateway = PokemonGateway::new(Arc::clone(&cache), Arc::new(transport), &config.base_url);
        Ok(Self { cache, gateway })
    }

    /// Creates an AppState from configuration.
    ///
    /// Uses a file backing when `storage_path` is set, memory otherwise.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let storage: Arc<dyn Storage> = match &config.storage_path {
            Some(path) => {
                info!("Cache storage file: {}", path.display());
                Arc::new(FileStorage::open(path))
            }
            None => Arc::new(MemoryStorage::new()),
        };
        Self::with_storage(config, storage)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Development console tools, when running a development build.
    pub fn dev_tools(&self) -> Option<DevTools> {
        DevTools::attach(&self.cache)
    }
}
