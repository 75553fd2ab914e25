//! Pokédex Cache - PokeAPI access behind a persistent TTL cache
//!
//! Provides generation rosters and Pokémon details for a team builder UI,
//! caching every successful lookup for 24 hours.

pub mod app;
pub mod cache;
pub mod config;
pub mod devtools;
pub mod error;
pub mod gateway;
pub mod models;
pub mod storage;
pub mod telemetry;

pub use app::AppState;
pub use config::Config;
pub use gateway::PokemonGateway;
pub use telemetry::init_tracing;
