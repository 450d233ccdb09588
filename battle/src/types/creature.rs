//! Static creature data

use pokemap_protocol::{CatalogEntry, PokemonId, PokemonSummary};

use super::pokemon_type::Type;
use crate::error::BattleError;

/// Base stats from the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseStats {
    /// Vitality
    pub hp: u32,
    /// Offense
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// Physical measurements, in metres and kilograms
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicalStats {
    pub height: f64,
    pub weight: f64,
}

/// A creature as described by the catalog (never changes during battle)
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    /// Catalog document id, if the creature came from the store
    pub record_id: Option<String>,

    /// Species number
    pub id: u32,

    pub name: String,

    pub stats: BaseStats,

    pub physical: PhysicalStats,

    pub capture_rate: u32,

    pub primary_type: Type,

    pub secondary_type: Option<Type>,

    /// Image reference served by the catalog
    pub image: Option<String>,
}

impl Creature {
    /// Create a single-typed creature with the given base stats
    pub fn new(id: u32, name: impl Into<String>, primary_type: Type, stats: BaseStats) -> Self {
        Self {
            record_id: None,
            id,
            name: name.into(),
            stats,
            physical: PhysicalStats::default(),
            capture_rate: 0,
            primary_type,
            secondary_type: None,
            image: None,
        }
    }

    /// Build from a catalog document, rejecting anything a battle could not
    /// be started with
    pub fn from_protocol(entry: &CatalogEntry) -> Result<Self, BattleError> {
        let record = &entry.pokemon;
        let id = record.pokemon_id.number().ok_or_else(|| {
            BattleError::invalid(format!(
                "pokemonId {:?} is not a species number",
                record.pokemon_id.to_string()
            ))
        })?;
        let name = record.name.trim();
        if name.is_empty() {
            return Err(BattleError::invalid(format!(
                "pokemon #{} has an empty name",
                id
            )));
        }

        Ok(Self {
            record_id: entry.id.clone(),
            id,
            name: name.to_string(),
            stats: BaseStats {
                hp: record.hp,
                attack: record.attack,
                defense: record.defense,
                speed: record.speed,
            },
            physical: PhysicalStats {
                height: record.height,
                weight: record.weight,
            },
            capture_rate: record.capture_rate,
            primary_type: Type::parse_required(&record.primary_type)?,
            secondary_type: Type::parse_optional(record.secondary_type.as_deref())?,
            image: entry.image_path.clone(),
        })
    }

    /// Descriptor shown to the caller for a unit of this creature
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            pokemon_id: Some(PokemonId::from(self.id)),
            name: Some(self.name.clone()),
            hp: Some(self.stats.hp),
            attack: Some(self.stats.attack),
            defense: Some(self.stats.defense),
            speed: Some(self.stats.speed),
            height: Some(self.physical.height),
            weight: Some(self.physical.weight),
            capture_rate: Some(self.capture_rate),
            primary_type: Some(self.primary_type.as_str().to_string()),
            secondary_type: self.secondary_type.map(|t| t.as_str().to_string()),
            extra: Default::default(),
        }
    }
}
