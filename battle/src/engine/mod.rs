//! The battle engine: a pure transition from one session snapshot to the next

mod events;
mod result;
mod rules;
mod turn;

pub use events::BattleEvent;
pub use result::{BattleResult, winner_by_health, winner_by_survival};
pub use rules::{BattleRules, DEFAULT_MAX_TURNS};
pub use turn::{advance, advance_with};
