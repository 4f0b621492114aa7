//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_graphql;
pub mod scripted_source;

use pokedex::schema::{CatalogEntity, EntityDetail, EntityId, Range};

pub use scripted_source::ScriptedSource;

// -- Fixtures -----------------------------------------------------------------

pub fn entity(number: &str, name: &str, types: &[&str]) -> CatalogEntity {
    CatalogEntity {
        id: EntityId::new(format!("UG9rZW1vbjo{}", number)),
        number: number.to_string(),
        name: name.to_string(),
        image_url: format!("https://img.pokemondb.net/artwork/{}.jpg", name.to_lowercase()),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn detail(number: &str, name: &str, types: &[&str]) -> EntityDetail {
    EntityDetail {
        summary: entity(number, name, types),
        classification: format!("{} Pokémon", name),
        resistant: vec!["Water".to_string(), "Grass".to_string()],
        weaknesses: vec!["Fire".to_string()],
        flee_rate: 0.1,
        max_cp: 951,
        max_hp: 1071,
        height: Range {
            minimum: "0.61m".to_string(),
            maximum: "0.79m".to_string(),
        },
        weight: Range {
            minimum: "6.04kg".to_string(),
            maximum: "7.76kg".to_string(),
        },
    }
}

/// The first few catalog entries in server order.
pub fn starter_catalog() -> Vec<CatalogEntity> {
    vec![
        entity("001", "Bulbasaur", &["Grass", "Poison"]),
        entity("004", "Charmander", &["Fire"]),
        entity("006", "Charizard", &["Fire", "Flying"]),
        entity("007", "Squirtle", &["Water"]),
        entity("010", "Caterpie", &["Bug"]),
    ]
}
