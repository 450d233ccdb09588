//! Battle unit state

use pokemap_protocol::{PokemonSummary, UnitRecord};

use super::creature::Creature;
use crate::error::BattleError;

/// Name shown for a unit whose descriptor carries none
pub const UNKNOWN_NAME: &str = "Unknown";

/// A creature taking part in a battle
///
/// `health` starts at `max_health` and only ever goes down; it never drops
/// below zero. The creature descriptor is display data: the engine reads the
/// name for log lines and otherwise hands it back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleUnit {
    /// Catalog document id
    pub record_id: Option<String>,

    pub pokemon: PokemonSummary,

    pub image: Option<String>,

    pub health: f64,

    /// Health at the start of the battle
    pub max_health: f64,

    /// Damage contributed to the team's attack, independent of the
    /// creature's catalog attack stat
    pub attack_power: f64,
}

impl BattleUnit {
    /// Create a unit at full health
    pub fn new(creature: Creature, health: f64, attack_power: f64) -> Self {
        Self {
            pokemon: creature.summary(),
            record_id: creature.record_id,
            image: creature.image,
            health,
            max_health: health,
            attack_power,
        }
    }

    /// Build from a unit record sent by the caller
    ///
    /// Only the battle numbers are checked; whatever the descriptor holds is
    /// kept as is. A record without `maxHealth` is assumed to be at full
    /// health.
    pub fn from_protocol(record: &UnitRecord) -> Result<Self, BattleError> {
        let unit = Self {
            record_id: record.id.clone(),
            pokemon: record.pokemon.clone(),
            image: record.image_path.clone(),
            health: record.health,
            max_health: record.max_health.unwrap_or(record.health),
            attack_power: record.attack_power,
        };
        unit.validate()?;
        Ok(unit)
    }

    pub fn to_protocol(&self) -> UnitRecord {
        UnitRecord {
            id: self.record_id.clone(),
            pokemon: self.pokemon.clone(),
            image_path: self.image.clone(),
            health: self.health,
            max_health: Some(self.max_health),
            attack_power: self.attack_power,
        }
    }

    /// Check the unit's numeric invariants
    pub fn validate(&self) -> Result<(), BattleError> {
        let name = self.name();
        if !self.health.is_finite() || self.health < 0.0 {
            return Err(BattleError::invalid(format!(
                "{} has invalid health {}",
                name, self.health
            )));
        }
        if !self.max_health.is_finite() || self.health > self.max_health {
            return Err(BattleError::invalid(format!(
                "{} has health {} above its maximum {}",
                name, self.health, self.max_health
            )));
        }
        if !self.attack_power.is_finite() || self.attack_power < 0.0 {
            return Err(BattleError::invalid(format!(
                "{} has invalid attack power {}",
                name, self.attack_power
            )));
        }
        Ok(())
    }

    /// Display name
    pub fn name(&self) -> &str {
        self.pokemon
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Species number, when the descriptor carries a numeric one
    pub fn species_id(&self) -> Option<u32> {
        self.pokemon.species_number()
    }

    /// Check if the unit can still fight
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_fainted(&self) -> bool {
        !self.is_alive()
    }

    /// Apply damage, clamping at zero. Returns true if this hit made the
    /// unit faint.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        if self.is_fainted() {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.is_fainted()
    }
}
