//! Raw PokeAPI response bodies
//!
//! Only the fields the gateway reads are declared; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// A `{name, url}` reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Extracts the trailing numeric id from the resource locator,
    /// e.g. `.../pokemon-species/25/` yields 25.
    pub fn id(&self) -> Option<u32> {
        self.url
            .rsplit('/')
            .find(|segment| !segment.is_empty())?
            .parse()
            .ok()
    }
}

/// Body of `GET /generation/{id}/`
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub pokemon_species: Vec<NamedResource>,
}

/// Body of `GET /type/{name}/`
#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    pub pokemon: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub pokemon: NamedResource,
}

/// Body of `GET /pokemon/{id}/`
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStatSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: SpritesResponse,
}

#[derive(Debug, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct PokemonStatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesResponse {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(url: &str) -> NamedResource {
        NamedResource {
            name: "x".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_id_from_trailing_segment() {
        assert_eq!(
            resource("https://pokeapi.co/api/v2/pokemon-species/25/").id(),
            Some(25)
        );
        assert_eq!(resource("https://pokeapi.co/api/v2/pokemon/151").id(), Some(151));
    }

    #[test]
    fn test_id_missing() {
        assert_eq!(resource("https://pokeapi.co/api/v2/pokemon/").id(), None);
        assert_eq!(resource("").id(), None);
    }

    #[test]
    fn test_generation_response_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "generation-i",
            "pokemon_species": [
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"}
            ]
        }"#;
        let body: GenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.pokemon_species.len(), 1);
        assert_eq!(body.pokemon_species[0].id(), Some(2));
    }
}
