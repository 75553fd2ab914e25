//! Cache key composition.

use std::fmt;

use crate::cache::CACHE_NAMESPACE;

// == Cache Category ==
/// Kind of record a cache key points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    /// A generation roster
    List,
    /// A single Pokémon detail record
    Details,
}

impl CacheCategory {
    pub fn tag(self) -> &'static str {
        match self {
            CacheCategory::List => "list",
            CacheCategory::Details => "details",
        }
    }

    /// Key prefix shared by every entry of this category.
    pub fn prefix(self) -> String {
        format!("{}{}_", CACHE_NAMESPACE, self.tag())
    }
}

// == Cache Key ==
/// Namespaced storage key, e.g. `pokemon_list_Kanto` or `pokemon_details_25`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(category: CacheCategory, identifier: impl fmt::Display) -> Self {
        Self(format!("{}{}", category.prefix(), identifier))
    }

    /// Key for the roster of a generation label.
    pub fn list(generation_label: &str) -> Self {
        Self::new(CacheCategory::List, generation_label)
    }

    /// Key for the detail record of a Pokémon id.
    pub fn details(id: u32) -> Self {
        Self::new(CacheCategory::Details, id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
