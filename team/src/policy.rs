//! How catalog stats become battle stats

use pokemap_battle::{BattleUnit, Creature};
use serde::Deserialize;

/// Derives a unit's starting health and attack power from its creature
pub trait UnitPolicy {
    fn health(&self, creature: &Creature) -> f64;

    fn attack_power(&self, creature: &Creature) -> f64;

    /// Shape a creature into a unit at full health
    fn shape(&self, creature: &Creature) -> BattleUnit {
        BattleUnit::new(
            creature.clone(),
            self.health(creature),
            self.attack_power(creature),
        )
    }
}

/// Attack power shared by both policies: full attack plus a third of speed
fn speed_weighted_attack(creature: &Creature) -> f64 {
    f64::from(creature.stats.attack) + f64::from(creature.stats.speed) / 3.0
}

/// Health equals base vitality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseStatPolicy;

impl UnitPolicy for BaseStatPolicy {
    fn health(&self, creature: &Creature) -> f64 {
        f64::from(creature.stats.hp)
    }

    fn attack_power(&self, creature: &Creature) -> f64 {
        speed_weighted_attack(creature)
    }
}

/// Health is vitality plus defense, for longer battles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulwarkPolicy;

impl UnitPolicy for BulwarkPolicy {
    fn health(&self, creature: &Creature) -> f64 {
        f64::from(creature.stats.hp) + f64::from(creature.stats.defense)
    }

    fn attack_power(&self, creature: &Creature) -> f64 {
        speed_weighted_attack(creature)
    }
}

/// Policy choice as written in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Base,
    Bulwark,
}

impl PolicyKind {
    pub fn policy(&self) -> Box<dyn UnitPolicy + Send + Sync> {
        match self {
            PolicyKind::Base => Box::new(BaseStatPolicy),
            PolicyKind::Bulwark => Box::new(BulwarkPolicy),
        }
    }
}
