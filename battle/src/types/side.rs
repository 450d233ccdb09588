//! Team (side) state

use pokemap_protocol::UnitRecord;

use super::unit::BattleUnit;
use crate::error::BattleError;

/// Which side of the battle a team fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    User,
    Cpu,
}

impl Side {
    /// The other side
    pub fn opponent(&self) -> Side {
        match self {
            Side::User => Side::Cpu,
            Side::Cpu => Side::User,
        }
    }

    /// Label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::User => "User",
            Side::Cpu => "CPU",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One side's units, in the order the caller supplied them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamState {
    pub units: Vec<BattleUnit>,
}

impl TeamState {
    pub fn new(units: Vec<BattleUnit>) -> Self {
        Self { units }
    }

    /// Build from unit records, failing on the first invalid record
    pub fn from_protocol(records: &[UnitRecord]) -> Result<Self, BattleError> {
        records
            .iter()
            .map(BattleUnit::from_protocol)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn to_protocol(&self) -> Vec<UnitRecord> {
        self.units.iter().map(BattleUnit::to_protocol).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// A team is alive while at least one unit has health left
    pub fn is_alive(&self) -> bool {
        self.units.iter().any(BattleUnit::is_alive)
    }

    /// Iterate over units that can still fight
    pub fn alive_units(&self) -> impl Iterator<Item = &BattleUnit> {
        self.units.iter().filter(|u| u.is_alive())
    }

    /// Count units that can still fight
    pub fn alive_count(&self) -> usize {
        self.alive_units().count()
    }

    /// Count fainted units
    pub fn fainted_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_fainted()).count()
    }

    /// Sum of health over units that are still alive
    pub fn total_alive_health(&self) -> f64 {
        self.alive_units().map(|u| u.health).sum()
    }

    /// Damage dealt to each opposing unit: the mean attack power of the
    /// alive units. `None` when nobody is left to attack.
    pub fn per_target_damage(&self) -> Option<f64> {
        let (total, count) = self
            .alive_units()
            .fold((0.0, 0usize), |(total, count), u| (total + u.attack_power, count + 1));
        (count > 0).then(|| total / count as f64)
    }

    /// Apply the same damage to every alive unit, returning the names of the
    /// units that fainted, in team order
    pub fn apply_damage(&mut self, amount: f64) -> Vec<String> {
        self.units
            .iter_mut()
            .filter(|u| u.is_alive())
            .filter_map(|u| u.take_damage(amount).then(|| u.name().to_string()))
            .collect()
    }

    /// Find a unit by species number
    pub fn find_by_id(&self, id: u32) -> Option<&BattleUnit> {
        self.units.iter().find(|u| u.species_id() == Some(id))
    }

    pub(crate) fn validate(&self, side: Side) -> Result<(), BattleError> {
        if self.is_empty() {
            return Err(BattleError::invalid(format!("{} team is empty", side)));
        }
        self.units.iter().try_for_each(BattleUnit::validate)
    }
}

impl FromIterator<BattleUnit> for TeamState {
    fn from_iter<I: IntoIterator<Item = BattleUnit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
