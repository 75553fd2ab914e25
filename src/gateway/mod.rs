//! Gateway Module
//!
//! Network access to PokeAPI, mediated by the cache.

mod pokemon;
mod transport;

pub use pokemon::{PokemonGateway, MAX_TYPE_RESULTS};
pub use transport::{ApiResponse, HttpTransport, ReqwestTransport};

/// Public PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
