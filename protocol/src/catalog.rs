//! Catalog documents and the unit records built on top of them
//!
//! Field names follow the stored catalog documents, which mix camelCase
//! (`pokemonId`) with snake_case (`capture_rate`, `primary_type`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ParseError;

/// Species number as stored in the catalog
///
/// The catalog importer writes it as text (`"25"`); numeric ids are accepted
/// too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonId {
    Number(u32),
    Text(String),
}

impl PokemonId {
    /// Numeric form, if the id is a number or numeric text
    pub fn number(&self) -> Option<u32> {
        match self {
            PokemonId::Number(n) => Some(*n),
            PokemonId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<u32> for PokemonId {
    fn from(n: u32) -> Self {
        PokemonId::Number(n)
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokemonId::Number(n) => write!(f, "{}", n),
            PokemonId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Static creature data as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    #[serde(rename = "pokemonId")]
    pub pokemon_id: PokemonId,

    pub name: String,

    /// Base vitality
    pub hp: u32,

    pub attack: u32,

    pub defense: u32,

    pub speed: u32,

    pub height: f64,

    pub weight: f64,

    pub capture_rate: u32,

    pub primary_type: String,

    #[serde(default)]
    pub secondary_type: Option<String>,
}

/// One catalog document: a creature plus its storage metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Document id in the backing store
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub pokemon: PokemonRecord,

    #[serde(default)]
    pub image_path: Option<String>,
}

/// Creature descriptor carried inside a unit record
///
/// Display data only. Every field is optional and a value of the wrong type
/// reads as absent; keys this struct does not know are kept in `extra` so the
/// descriptor goes back to the caller as it came in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    #[serde(
        rename = "pokemonId",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub pokemon_id: Option<PokemonId>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub capture_rate: Option<u32>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub secondary_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PokemonSummary {
    /// Numeric species number, if the descriptor carries one
    pub fn species_number(&self) -> Option<u32> {
        self.pokemon_id.as_ref().and_then(PokemonId::number)
    }
}

/// Read a value if it has the expected shape, `None` otherwise
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// A creature descriptor carrying battle state, as exchanged with the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub pokemon: PokemonSummary,

    #[serde(default)]
    pub image_path: Option<String>,

    pub health: f64,

    #[serde(
        rename = "maxHealth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_health: Option<f64>,

    #[serde(rename = "attackPower")]
    pub attack_power: f64,
}

/// A catalog document that could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position in the exported array
    pub index: usize,
    pub reason: String,
}

/// Result of reading a catalog export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    pub skipped: Vec<SkippedEntry>,
}

/// Parse a catalog export (a JSON array of catalog documents)
///
/// Only a malformed array fails the whole export; documents that do not match
/// [`CatalogEntry`] are reported in [`Catalog::skipped`].
pub fn parse_catalog(json: &str) -> Result<Catalog, ParseError> {
    if json.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }
    let documents: Vec<Value> = serde_json::from_str(json)?;

    let mut catalog = Catalog::default();
    for (index, document) in documents.into_iter().enumerate() {
        match serde_json::from_value(document) {
            Ok(entry) => catalog.entries.push(entry),
            Err(e) => catalog.skipped.push(SkippedEntry {
                index,
                reason: e.to_string(),
            }),
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "_id": "65f1c0a2",
        "pokemon": {
            "pokemonId": "1",
            "name": "Bulbasaur",
            "hp": 45,
            "attack": 49,
            "defense": 49,
            "speed": 45,
            "height": 0.7,
            "weight": 6.9,
            "capture_rate": 45,
            "primary_type": "Grass",
            "secondary_type": "Poison"
        },
        "image_path": "bulbasaur.png"
    }"#;

    #[test]
    fn test_parse_catalog_entry() {
        let entry: CatalogEntry = serde_json::from_str(BULBASAUR).unwrap();
        assert_eq!(entry.id.as_deref(), Some("65f1c0a2"));
        assert_eq!(entry.pokemon.pokemon_id, PokemonId::Text("1".to_string()));
        assert_eq!(entry.pokemon.pokemon_id.number(), Some(1));
        assert_eq!(entry.pokemon.name, "Bulbasaur");
        assert_eq!(entry.pokemon.secondary_type.as_deref(), Some("Poison"));
        assert_eq!(entry.image_path.as_deref(), Some("bulbasaur.png"));
    }

    #[test]
    fn test_pokemon_id_forms() {
        let number: PokemonId = serde_json::from_str("25").unwrap();
        let text: PokemonId = serde_json::from_str("\" 25 \"").unwrap();
        let other: PokemonId = serde_json::from_str("\"25a\"").unwrap();

        assert_eq!(number.number(), Some(25));
        assert_eq!(text.number(), Some(25));
        assert_eq!(other.number(), None);
        assert_eq!(other.to_string(), "25a");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "pokemon": {
                "pokemonId": 25, "name": "Pikachu", "hp": 35, "attack": 55,
                "defense": 40, "speed": 90, "height": 0.4, "weight": 6.0,
                "capture_rate": 190, "primary_type": "Electric"
            }
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.id.is_none());
        assert!(entry.image_path.is_none());
        assert!(entry.pokemon.secondary_type.is_none());
    }

    #[test]
    fn test_unit_record_fields() {
        let json = r#"{
            "_id": "abc",
            "pokemon": {
                "pokemonId": "4", "name": "Charmander", "hp": 39, "attack": 52,
                "defense": 43, "speed": 65, "height": 0.6, "weight": 8.5,
                "capture_rate": 45, "primary_type": "Fire", "secondary_type": null
            },
            "image_path": null,
            "health": 82,
            "maxHealth": 82,
            "attackPower": 73.66
        }"#;
        let unit: UnitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(unit.pokemon.name.as_deref(), Some("Charmander"));
        assert_eq!(unit.pokemon.species_number(), Some(4));
        assert_eq!(unit.health, 82.0);
        assert_eq!(unit.max_health, Some(82.0));
        assert!((unit.attack_power - 73.66).abs() < 1e-9);

        let value = serde_json::to_value(&unit).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["attackPower"], 73.66);
        assert_eq!(value["pokemon"]["pokemonId"], "4");
        assert!(value["image_path"].is_null());
    }

    #[test]
    fn test_unit_record_sparse_descriptor() {
        let json = r#"{ "pokemon": { "name": "Pikachu" }, "health": 75, "attackPower": 85 }"#;
        let unit: UnitRecord = serde_json::from_str(json).unwrap();

        assert_eq!(unit.pokemon.name.as_deref(), Some("Pikachu"));
        assert_eq!(unit.pokemon.species_number(), None);
        assert!(unit.pokemon.hp.is_none());
        assert!(unit.max_health.is_none());
    }

    #[test]
    fn test_unit_record_tolerates_odd_descriptor() {
        let json = r#"{
            "pokemon": {
                "pokemonId": "25", "name": "Pikachu", "hp": "lots",
                "primary_type": "Shadow", "legendary": false
            },
            "health": 10,
            "attackPower": 5
        }"#;
        let unit: UnitRecord = serde_json::from_str(json).unwrap();
        assert!(unit.pokemon.hp.is_none());
        assert_eq!(unit.pokemon.primary_type.as_deref(), Some("Shadow"));

        let value = serde_json::to_value(&unit).unwrap();
        assert_eq!(value["pokemon"]["legendary"], false);
        assert_eq!(value["pokemon"]["primary_type"], "Shadow");
    }

    #[test]
    fn test_parse_catalog_empty_body() {
        assert!(matches!(parse_catalog("  "), Err(ParseError::EmptyBody)));
    }

    #[test]
    fn test_parse_catalog_array() {
        let json = format!("[{}, {}]", BULBASAUR, BULBASAUR);
        let catalog = parse_catalog(&json).unwrap();
        assert_eq!(catalog.entries.len(), 2);
        assert!(catalog.skipped.is_empty());
    }

    #[test]
    fn test_parse_catalog_skips_bad_documents() {
        let json = format!(r#"[{}, {{ "pokemon": {{ "name": "Missingno" }} }}, {}]"#, BULBASAUR, BULBASAUR);
        let catalog = parse_catalog(&json).unwrap();

        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.skipped.len(), 1);
        assert_eq!(catalog.skipped[0].index, 1);
    }

    #[test]
    fn test_parse_catalog_not_an_array() {
        assert!(matches!(
            parse_catalog(r#"{ "pokemon": 1 }"#),
            Err(ParseError::InvalidJson(_))
        ));
    }
}
