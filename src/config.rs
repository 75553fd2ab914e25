//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::gateway::DEFAULT_BASE_URL;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root URL of the PokeAPI instance
    pub base_url: String,
    /// Development build: the cache flag is re-read from storage on every check
    pub development_mode: bool,
    /// JSON file backing the cache; in-memory when unset
    pub storage_path: Option<PathBuf>,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_DEV_MODE` - `true`/`1` for a development build (default: false)
    /// - `POKEDEX_STORAGE_PATH` - cache file location (default: in-memory)
    /// - `POKEDEX_REQUEST_TIMEOUT` - request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            development_mode: env::var("POKEDEX_DEV_MODE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.development_mode),
            storage_path: env::var_os("POKEDEX_STORAGE_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            request_timeout: env::var("POKEDEX_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            development_mode: false,
            storage_path: None,
            request_timeout: 10,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
