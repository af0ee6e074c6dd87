//! PokeAPI v1 response bodies

use crate::point::Stat;
use serde::{Deserialize, Serialize};

/// Stat labels in display order, matching [`PokemonRecord::stats`]
pub const STAT_LABELS: [&str; 6] = ["HP", "Atk", "Def", "SpA", "SpD", "Spe"];

/// Entity record from `/api/v1/pokemon/{key}`
///
/// Only the fields the pipeline reads; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_atk: u32,
    pub sp_def: u32,
    pub speed: u32,
    #[serde(default)]
    pub sprites: Vec<SpriteRef>,
    #[serde(default)]
    pub descriptions: Vec<DescriptionRef>,
}

impl PokemonRecord {
    /// The six base stats, labelled, in fixed order
    pub fn stats(&self) -> Vec<Stat> {
        let values = [
            self.hp,
            self.attack,
            self.defense,
            self.sp_atk,
            self.sp_def,
            self.speed,
        ];

        STAT_LABELS
            .iter()
            .zip(values)
            .map(|(label, value)| Stat::new(*label, value))
            .collect()
    }
}

/// Link to a sprite resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteRef {
    pub resource_uri: String,
}

/// Link to a description resource, named after its game generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRef {
    pub name: String,
    pub resource_uri: String,
}

/// Sprite resource; `image` is a path relative to the API host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteRecord {
    pub image: String,
}

/// Description resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pokemon_record() {
        let json = serde_json::json!({
            "name": "Bulbasaur",
            "national_id": 1,
            "hp": 45,
            "attack": 49,
            "defense": 49,
            "sp_atk": 65,
            "sp_def": 65,
            "speed": 45,
            "sprites": [
                {"name": "bulbasaur", "resource_uri": "/api/v1/sprite/1/"},
                {"name": "bulbasaur", "resource_uri": "/api/v1/sprite/2/"}
            ],
            "descriptions": [
                {"name": "bulbasaur_gen_1", "resource_uri": "/api/v1/description/1/"}
            ]
        });

        let record: PokemonRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.sp_atk, 65);
        assert_eq!(record.sprites.len(), 2);
        assert_eq!(record.descriptions[0].name, "bulbasaur_gen_1");
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let json = r#"{"hp": 1, "attack": 2, "defense": 3, "sp_atk": 4, "sp_def": 5, "speed": 6}"#;
        let record: PokemonRecord = serde_json::from_str(json).unwrap();
        assert!(record.sprites.is_empty());
        assert!(record.descriptions.is_empty());
    }

    #[test]
    fn test_stats_order() {
        let json = r#"{"hp": 1, "attack": 2, "defense": 3, "sp_atk": 4, "sp_def": 5, "speed": 6}"#;
        let record: PokemonRecord = serde_json::from_str(json).unwrap();

        let stats = record.stats();
        let labels: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        let values: Vec<u32> = stats.iter().map(|s| s.value).collect();

        assert_eq!(labels, STAT_LABELS);
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
