//! Domain types for battle sessions

mod creature;
mod pokemon_type;
mod session;
mod side;
mod unit;

pub use creature::{BaseStats, Creature, PhysicalStats};
pub use pokemon_type::Type;
pub use session::BattleSession;
pub use side::{Side, TeamState};
pub use unit::{BattleUnit, UNKNOWN_NAME};
