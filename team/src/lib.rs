//! Starting teams for PokeMap battles.
//!
//! The initializer samples a user team and, independently, a CPU team from a
//! pool of catalog creatures. The user then picks a squad out of the offered
//! units, which together with the CPU team opens a [`BattleSession`].
//!
//! ```ignore
//! use pokemap_team::TeamInitializer;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let teams = TeamInitializer::new().start(&creatures, &mut rng)?;
//! let session = teams.into_session(&[25, 4, 7], 3)?;
//! ```
//!
//! [`BattleSession`]: pokemap_battle::BattleSession

mod error;
mod initializer;
mod policy;
mod selection;

pub use error::TeamError;
pub use initializer::{
    CPU_TEAM_SIZE, MIN_POOL_SIZE, SQUAD_SIZE, StartingTeams, TeamConfig, TeamInitializer,
    USER_TEAM_SIZE, creatures_from_catalog,
};
pub use policy::{BaseStatPolicy, BulwarkPolicy, PolicyKind, UnitPolicy};
pub use selection::select_squad;
