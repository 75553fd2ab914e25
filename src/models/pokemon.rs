//! Canonical Pokémon records
//!
//! The gateway converts raw API bodies into these shapes; nothing else in
//! the crate looks at the raw format.

use serde::{Deserialize, Serialize};

use crate::models::api::{NamedResource, PokemonResponse, PokemonStatSlot};

/// Sprite shown when the API does not provide a front sprite.
pub const FALLBACK_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

// == Pokemon Summary ==
/// Minimal roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
}

impl PokemonSummary {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Builds a summary from a species or pokemon reference. None when the
    /// locator carries no numeric id.
    pub fn from_resource(resource: &NamedResource) -> Option<Self> {
        resource.id().map(|id| Self::new(id, resource.name.clone()))
    }
}

// == Pokemon Stats ==
/// Base stats. Stats missing from the API response are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl PokemonStats {
    pub fn from_slots(slots: &[PokemonStatSlot]) -> Self {
        let stat = |name: &str| {
            slots
                .iter()
                .find(|slot| slot.stat.name == name)
                .map_or(0, |slot| slot.base_stat)
        };

        Self {
            hp: stat("hp"),
            attack: stat("attack"),
            defense: stat("defense"),
            special_attack: stat("special-attack"),
            special_defense: stat("special-defense"),
            speed: stat("speed"),
        }
    }

    /// Sum of all six stats.
    pub fn total(&self) -> u32 {
        self.hp
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}

// == Sprite Urls ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteUrls {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
}

// == Pokemon Detail ==
/// Full record for one Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Type names in slot order
    pub types: Vec<String>,
    pub stats: PokemonStats,
    pub height_decimeters: u32,
    pub weight_hectograms: u32,
    /// Ability names in slot order
    pub abilities: Vec<String>,
    pub base_experience: u32,
    pub sprite_urls: SpriteUrls,
}

impl From<PokemonResponse> for PokemonDetail {
    fn from(raw: PokemonResponse) -> Self {
        let official_artwork = raw
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);

        Self {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats: PokemonStats::from_slots(&raw.stats),
            height_decimeters: raw.height,
            weight_hectograms: raw.weight,
            abilities: raw.abilities.into_iter().map(|slot| slot.ability.name).collect(),
            base_experience: raw.base_experience.unwrap_or(0),
            sprite_urls: SpriteUrls {
                front_default: raw.sprites.front_default,
                front_shiny: raw.sprites.front_shiny,
                back_default: raw.sprites.back_default,
                back_shiny: raw.sprites.back_shiny,
                official_artwork,
            },
        }
    }
}

impl PokemonDetail {
    pub fn height_in_meters(&self) -> f64 {
        f64::from(self.height_decimeters) / 10.0
    }

    pub fn weight_in_kilograms(&self) -> f64 {
        f64::from(self.weight_hectograms) / 10.0
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn secondary_type(&self) -> Option<&str> {
        self.types.get(1).map(String::as_str)
    }

    /// Case-insensitive type membership.
    pub fn has_type(&self, type_name: &str) -> bool {
        let wanted = type_name.to_lowercase();
        self.types.iter().any(|t| *t == wanted)
    }

    /// Front sprite, or the sprite repository image for this id.
    pub fn sprite(&self) -> String {
        self.sprite_urls
            .front_default
            .clone()
            .unwrap_or_else(|| format!("{}/{}.png", FALLBACK_SPRITE_BASE, self.id))
    }

    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary::new(self.id, self.name.clone())
    }
}
