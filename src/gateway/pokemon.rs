//! Pokémon Gateway
//!
//! The only component that talks to the network. Every roster and detail
//! lookup consults the cache first and fills it after a successful fetch.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheKey, CacheStore};
use crate::error::{GatewayError, Result};
use crate::gateway::HttpTransport;
use crate::models::api::{GenerationResponse, PokemonResponse, TypeResponse};
use crate::models::{
    generation_info, mixed_roster, GenerationSource, PokemonDetail, PokemonSummary, MIXED_LABEL,
};

/// Maximum entries returned by a type search
pub const MAX_TYPE_RESULTS: usize = 50;

// == Pokemon Gateway ==
/// Cache-aware client for the PokeAPI roster, detail and type endpoints.
///
/// Cloning is cheap; clones share the cache and transport.
#[derive(Clone)]
pub struct PokemonGateway {
    cache: Arc<CacheStore>,
    transport: Arc<dyn HttpTransport>,
    base_url: Arc<str>,
}

impl PokemonGateway {
    pub fn new(
        cache: Arc<CacheStore>,
        transport: Arc<dyn HttpTransport>,
        base_url: impl AsRef<str>,
    ) -> Self {
        Self {
            cache,
            transport,
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    // == Fetch List ==
    /// Returns the roster of a generation, ascending by id.
    ///
    /// The mixed generation never hits the network. Remote failures are
    /// reported and leave the cache untouched.
    pub async fn fetch_list(&self, generation_label: &str) -> Result<Vec<PokemonSummary>> {
        self.count_request();

        let generation = generation_info(generation_label)
            .ok_or_else(|| GatewayError::UnknownGeneration(generation_label.to_string()))?;
        let key = CacheKey::list(generation_label);

        if let Some(mut cached) = self.cache.get::<Vec<PokemonSummary>>(&key) {
            self.count_hit();
            cached.sort_by_key(|pokemon| pokemon.id);
            return Ok(cached);
        }

        let mut roster = match generation.source {
            GenerationSource::Mixed => mixed_roster(),
            GenerationSource::Remote { id } => self.fetch_roster(generation_label, id).await?,
        };
        roster.sort_by_key(|pokemon| pokemon.id);

        self.store(&key, &roster);
        info!("Loaded {} Pokémon for {}", roster.len(), generation_label);
        Ok(roster)
    }

    async fn fetch_roster(&self, label: &str, generation_id: u8) -> Result<Vec<PokemonSummary>> {
        let url = format!("{}/generation/{}/", self.base_url, generation_id);
        let response = self.transport.get_json(&url).await.map_err(|err| {
            error!("Roster request for {} failed: {}", label, err);
            GatewayError::generation_fetch(label, err)
        })?;

        if !response.is_success() {
            error!("Roster request for {} returned status {}", label, response.status);
            return Err(GatewayError::generation_fetch(
                label,
                format!("status {}", response.status),
            ));
        }

        let body: GenerationResponse = decode(response.body)
            .map_err(|err| GatewayError::generation_fetch(label, err))?;

        Ok(body
            .pokemon_species
            .iter()
            .filter_map(|species| {
                let summary = PokemonSummary::from_resource(species);
                if summary.is_none() {
                    warn!("Skipping species {} without numeric id: {}", species.name, species.url);
                }
                summary
            })
            .collect())
    }

    // == Fetch Details ==
    /// Returns the full record for `id`, or None when it cannot be fetched.
    ///
    /// Failures are logged, never raised, so callers can fall back to the
    /// summary they already hold.
    pub async fn fetch_details(&self, id: u32) -> Option<PokemonDetail> {
        self.count_request();

        let key = CacheKey::details(id);
        if let Some(cached) = self.cache.get::<PokemonDetail>(&key) {
            self.count_hit();
            return Some(cached);
        }

        let url = format!("{}/pokemon/{}/", self.base_url, id);
        let response = match self.transport.get_json(&url).await {
            Ok(response) => response,
            Err(err) => {
                error!("Detail request for Pokémon {} failed: {}", id, err);
                return None;
            }
        };

        if !response.is_success() {
            debug!("Detail request for Pokémon {} returned status {}", id, response.status);
            return None;
        }

        let detail: PokemonDetail = match decode::<PokemonResponse>(response.body) {
            Ok(raw) => raw.into(),
            Err(err) => {
                warn!("Detail body for Pokémon {} is malformed: {}", id, err);
                return None;
            }
        };

        self.store(&key, &detail);
        Some(detail)
    }

    // == Fetch Many ==
    /// Fetches every id concurrently and keeps the successes. Identical ids
    /// are not coalesced.
    ///
    /// Each fetch runs as its own task, so dropping the returned future does
    /// not cancel fetches already issued; they still complete and fill the
    /// cache.
    pub async fn fetch_many(&self, ids: &[u32]) -> Vec<PokemonDetail> {
        let handles: Vec<JoinHandle<Option<PokemonDetail>>> = ids
            .iter()
            .map(|&id| {
                let gateway = self.clone();
                tokio::spawn(async move { gateway.fetch_details(id).await })
            })
            .collect();

        let mut details = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(Some(detail)) => details.push(detail),
                Ok(None) => {}
                Err(err) => warn!("Detail task failed: {}", err),
            }
        }
        details
    }

    // == Search By Type ==
    /// Lists up to [`MAX_TYPE_RESULTS`] Pokémon of a type. Not cached; any
    /// failure yields an empty list.
    pub async fn search_by_type(&self, type_name: &str) -> Vec<PokemonSummary> {
        let url = format!("{}/type/{}/", self.base_url, type_name.to_lowercase());
        let response = match self.transport.get_json(&url).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                debug!("Type search {} returned status {}", type_name, response.status);
                return Vec::new();
            }
            Err(err) => {
                error!("Type search {} failed: {}", type_name, err);
                return Vec::new();
            }
        };

        match decode::<TypeResponse>(response.body) {
            Ok(body) => body
                .pokemon
                .iter()
                .take(MAX_TYPE_RESULTS)
                .filter_map(|slot| PokemonSummary::from_resource(&slot.pokemon))
                .collect(),
            Err(err) => {
                warn!("Type search {} body is malformed: {}", type_name, err);
                Vec::new()
            }
        }
    }

    // == Validate ==
    /// Checks with a HEAD request whether the API knows `id`.
    pub async fn validate_pokemon(&self, id: u32) -> bool {
        let url = format!("{}/pokemon/{}/", self.base_url, id);
        match self.transport.head(&url).await {
            Ok(status) => (200..300).contains(&status),
            Err(err) => {
                debug!("Validation of Pokémon {} failed: {}", id, err);
                false
            }
        }
    }

    // == Generation Count ==
    /// Size of a generation's roster: exact when cached, estimated otherwise.
    /// Does not count as a request.
    pub fn generation_count(&self, generation_label: &str) -> usize {
        if let Some(cached) = self
            .cache
            .get::<Vec<PokemonSummary>>(&CacheKey::list(generation_label))
        {
            return cached.len();
        }

        generation_info(generation_label)
            .or_else(|| generation_info(MIXED_LABEL))
            .map_or(0, |generation| generation.estimated_count())
    }

    // == Cache Helpers ==
    fn count_request(&self) {
        if let Err(err) = self.cache.record_request() {
            warn!("Failed to record request: {}", err);
        }
    }

    fn count_hit(&self) {
        if let Err(err) = self.cache.record_hit() {
            warn!("Failed to record cache hit: {}", err);
        }
    }

    fn store<T: Serialize + ?Sized>(&self, key: &CacheKey, payload: &T) {
        if let Err(err) = self.cache.put(key, payload) {
            warn!("Failed to cache {}: {}", key, err);
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: Option<Value>) -> std::result::Result<T, String> {
    let body = body.ok_or_else(|| "empty response body".to_string())?;
    serde_json::from_value(body).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use crate::error::TransportError;
    use crate::gateway::ApiResponse;

    struct Offline;

    #[async_trait]
    impl HttpTransport for Offline {
        async fn get_json(&self, url: &str) -> std::result::Result<ApiResponse, TransportError> {
            Err(TransportError::Request {
                url: url.to_string(),
                message: "offline".to_string(),
            })
        }

        async fn head(&self, url: &str) -> std::result::Result<u16, TransportError> {
            self.get_json(url).await.map(|response| response.status)
        }
    }

    fn offline_gateway() -> PokemonGateway {
        let cache = Arc::new(CacheStore::open(Arc::new(MemoryStorage::new()), false));
        PokemonGateway::new(cache, Arc::new(Offline), "https://pokeapi.test/api/v2/")
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(&*offline_gateway().base_url, "https://pokeapi.test/api/v2");
    }

    #[tokio::test]
    async fn test_offline_mixed_generation_still_served() {
        let gateway = offline_gateway();

        let roster = gateway.fetch_list(MIXED_LABEL).await.unwrap();
        assert_eq!(roster.len(), 6);
    }

    #[tokio::test]
    async fn test_offline_failures_degrade() {
        let gateway = offline_gateway();

        assert!(matches!(
            gateway.fetch_list("Kanto").await,
            Err(GatewayError::GenerationFetch { .. })
        ));
        assert!(gateway.fetch_details(1).await.is_none());
        assert!(gateway.search_by_type("fire").await.is_empty());
        assert!(!gateway.validate_pokemon(1).await);
        assert_eq!(gateway.cache().items_in_cache(), 0);
    }

    #[tokio::test]
    async fn test_unknown_generation() {
        let gateway = offline_gateway();

        let result = gateway.fetch_list("Atlantis").await;
        assert!(matches!(result, Err(GatewayError::UnknownGeneration(_))));
        assert_eq!(gateway.cache().stats().total_requests, 1);
    }

    #[test]
    fn test_generation_count_estimates() {
        let gateway = offline_gateway();

        assert_eq!(gateway.generation_count("Kanto"), 151);
        assert_eq!(gateway.generation_count("Atlantis"), 6);
    }
}
