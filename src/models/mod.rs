//! Data models
//!
//! Canonical Pokémon records, the generation table and the raw API bodies
//! they are parsed from.

pub mod api;
mod generation;
mod pokemon;

pub use generation::{
    generation_info, generations, mixed_roster, Generation, GenerationSource, GENERATIONS,
    MIXED_LABEL,
};
pub use pokemon::{PokemonDetail, PokemonStats, PokemonSummary, SpriteUrls, FALLBACK_SPRITE_BASE};
