//! Random team sampling

use std::collections::HashSet;

use pokemap_battle::{Creature, TeamState};
use pokemap_protocol::{CatalogEntry, StartResponse};
use rand::Rng;
use rand::seq::index;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::TeamError;
use crate::policy::{BaseStatPolicy, PolicyKind, UnitPolicy};

/// Units offered to the user (7 in the standard game)
pub const USER_TEAM_SIZE: usize = 7;
/// Units fielded by the CPU
pub const CPU_TEAM_SIZE: usize = 3;
/// Units the user takes into battle out of the offered ones
pub const SQUAD_SIZE: usize = 3;
/// Smallest catalog a game can be started from
pub const MIN_POOL_SIZE: usize = 10;

/// Team shape settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub user_size: usize,
    pub cpu_size: usize,
    pub squad_size: usize,
    pub min_pool: usize,
    pub policy: PolicyKind,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            user_size: USER_TEAM_SIZE,
            cpu_size: CPU_TEAM_SIZE,
            squad_size: SQUAD_SIZE,
            min_pool: MIN_POOL_SIZE,
            policy: PolicyKind::default(),
        }
    }
}

/// Teams produced at the start of a game
#[derive(Debug, Clone, PartialEq)]
pub struct StartingTeams {
    /// Units offered to the user
    pub user: TeamState,
    pub cpu: TeamState,
}

impl StartingTeams {
    pub fn to_protocol(&self) -> StartResponse {
        StartResponse {
            user_pokemon: self.user.to_protocol(),
            cpu_pokemon: self.cpu.to_protocol(),
        }
    }
}

/// Builds starting teams from a pool of creatures
pub struct TeamInitializer<P = BaseStatPolicy> {
    pub user_size: usize,
    pub cpu_size: usize,
    pub squad_size: usize,
    pub min_pool: usize,
    policy: P,
}

impl TeamInitializer<BaseStatPolicy> {
    /// Standard game: 7 offered, 3 for the CPU, at least 10 in the pool
    pub fn new() -> Self {
        Self::with_policy(BaseStatPolicy)
    }
}

impl Default for TeamInitializer<BaseStatPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamInitializer<Box<dyn UnitPolicy + Send + Sync>> {
    /// Build from configuration, choosing the policy at runtime
    pub fn from_config(config: &TeamConfig) -> Self {
        Self {
            user_size: config.user_size,
            cpu_size: config.cpu_size,
            squad_size: config.squad_size,
            min_pool: config.min_pool,
            policy: config.policy.policy(),
        }
    }
}

impl<P: UnitPolicy> TeamInitializer<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            user_size: USER_TEAM_SIZE,
            cpu_size: CPU_TEAM_SIZE,
            squad_size: SQUAD_SIZE,
            min_pool: MIN_POOL_SIZE,
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Pool size below which a game cannot start
    pub fn required_pool(&self) -> usize {
        self.min_pool.max(self.user_size).max(self.cpu_size)
    }

    /// Sample the user and CPU teams
    ///
    /// Each team is drawn without replacement from the distinct creatures in
    /// `pool`; the two draws are independent, so a creature may appear on
    /// both sides.
    pub fn start<R: Rng + ?Sized>(
        &self,
        pool: &[Creature],
        rng: &mut R,
    ) -> Result<StartingTeams, TeamError> {
        let distinct = distinct_by_id(pool);
        let required = self.required_pool();
        if distinct.len() < required {
            warn!(
                available = distinct.len(),
                required, "not enough Pokémon to start a game"
            );
            return Err(TeamError::InsufficientPool {
                available: distinct.len(),
                required,
            });
        }

        let user = self.sample(&distinct, self.user_size, rng);
        let cpu = self.sample(&distinct, self.cpu_size, rng);
        info!(
            pool = distinct.len(),
            user = user.len(),
            cpu = cpu.len(),
            "starting teams sampled"
        );

        Ok(StartingTeams { user, cpu })
    }

    fn sample<R: Rng + ?Sized>(&self, pool: &[&Creature], amount: usize, rng: &mut R) -> TeamState {
        index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| self.policy.shape(pool[i]))
            .collect()
    }
}

impl<P: UnitPolicy + ?Sized> UnitPolicy for Box<P> {
    fn health(&self, creature: &Creature) -> f64 {
        (**self).health(creature)
    }

    fn attack_power(&self, creature: &Creature) -> f64 {
        (**self).attack_power(creature)
    }
}

/// First creature for each species number, in pool order
fn distinct_by_id(pool: &[Creature]) -> Vec<&Creature> {
    let mut seen = HashSet::new();
    pool.iter().filter(|c| seen.insert(c.id)).collect()
}

/// Convert catalog documents into creatures, skipping ones that do not convert
pub fn creatures_from_catalog(entries: &[CatalogEntry]) -> Vec<Creature> {
    entries
        .iter()
        .filter_map(|entry| match Creature::from_protocol(entry) {
            Ok(creature) => Some(creature),
            Err(e) => {
                warn!(pokemon_id = %entry.pokemon.pokemon_id, error = %e, "skipping catalog entry");
                None
            }
        })
        .inspect(|c| debug!(id = c.id, name = %c.name, "catalog entry loaded"))
        .collect()
}
