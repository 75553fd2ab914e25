//! Shared fixtures: a scripted transport and canned PokeAPI bodies.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pokedex_cache::cache::CacheStore;
use pokedex_cache::error::TransportError;
use pokedex_cache::gateway::{ApiResponse, HttpTransport, PokemonGateway};
use pokedex_cache::storage::MemoryStorage;
use serde_json::{json, Value};

pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Fail,
}

/// Answers requests from a fixed table and records every URL it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
    latency: Option<Duration>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(format!("{}{}", BASE_URL, path), reply);
        self
    }

    /// Delays every GET by `latency`, like a slow network.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn answer(&self, url: &str) -> Reply {
        self.calls.lock().unwrap().push(url.to_string());
        self.replies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Reply::Status(404))
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get_json(&self, url: &str) -> Result<ApiResponse, TransportError> {
        // Let concurrent callers interleave
        match self.latency {
            Some(latency) => tokio::time::sleep(latency).await,
            None => tokio::task::yield_now().await,
        }
        match self.answer(url) {
            Reply::Json(body) => Ok(ApiResponse::ok(body)),
            Reply::Status(status) => Ok(ApiResponse::status(status)),
            Reply::Fail => Err(TransportError::Request {
                url: url.to_string(),
                message: "connection reset".to_string(),
            }),
        }
    }

    async fn head(&self, url: &str) -> Result<u16, TransportError> {
        match self.answer(url) {
            Reply::Json(_) => Ok(200),
            Reply::Status(status) => Ok(status),
            Reply::Fail => Err(TransportError::Request {
                url: url.to_string(),
                message: "connection reset".to_string(),
            }),
        }
    }
}

pub struct Harness {
    pub storage: MemoryStorage,
    pub transport: Arc<ScriptedTransport>,
    pub gateway: PokemonGateway,
}

pub fn harness(transport: ScriptedTransport) -> Harness {
    harness_over(MemoryStorage::new(), transport)
}

pub fn harness_over(storage: MemoryStorage, transport: ScriptedTransport) -> Harness {
    let transport = Arc::new(transport);
    let cache = Arc::new(CacheStore::open(Arc::new(storage.clone()), false));
    let gateway = PokemonGateway::new(cache, transport.clone(), BASE_URL);
    Harness {
        storage,
        transport,
        gateway,
    }
}

fn species(id: u32, name: &str) -> Value {
    json!({
        "name": name,
        "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)
    })
}

/// Generation body with species deliberately out of order.
pub fn kanto_body() -> Value {
    json!({
        "id": 1,
        "name": "generation-i",
        "pokemon_species": [
            species(4, "charmander"),
            species(1, "bulbasaur"),
            species(7, "squirtle"),
            species(2, "ivysaur"),
        ]
    })
}

pub fn pokemon_body(id: u32, name: &str, types: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": "u"}}))
            .collect::<Vec<_>>(),
        "stats": [
            {"base_stat": 35, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 55, "stat": {"name": "attack", "url": "u"}},
            {"base_stat": 40, "stat": {"name": "defense", "url": "u"}},
            {"base_stat": 50, "stat": {"name": "special-attack", "url": "u"}},
            {"base_stat": 50, "stat": {"name": "special-defense", "url": "u"}},
            {"base_stat": 90, "stat": {"name": "speed", "url": "u"}}
        ],
        "abilities": [{"ability": {"name": "static", "url": "u"}}],
        "sprites": {
            "front_default": format!("https://img/{}.png", id),
            "front_shiny": null,
            "back_default": null,
            "back_shiny": null
        }
    })
}
