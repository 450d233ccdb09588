//! Result of advancing a session

use pokemap_protocol::{TurnResponse, Winner};

use super::events::BattleEvent;
use crate::types::{BattleSession, Side};

/// Next snapshot plus what happened during this call
#[derive(Debug, Clone, PartialEq)]
pub struct BattleResult {
    /// Teams as mutated, and the turn to play next
    pub session: BattleSession,

    /// Events from this call only; history is the caller's concern
    pub log: Vec<BattleEvent>,

    pub game_over: bool,

    /// `None` while the battle is in progress
    pub winner: Option<Winner>,
}

impl BattleResult {
    /// Render the log as display lines
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }

    /// Whether a side attacked during this call
    pub fn attacked(&self, side: Side) -> bool {
        self.log.iter().any(|e| e.is_attack_by(side))
    }

    /// Names of the units a side lost during this call
    pub fn fainted(&self, side: Side) -> Vec<&str> {
        self.log
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Faint { side: s, name } if *s == side => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn to_protocol(&self) -> TurnResponse {
        TurnResponse {
            user_team: self.session.user_team.to_protocol(),
            cpu_team: self.session.cpu_team.to_protocol(),
            current_turn: self.session.current_turn,
            battle_log: self.log_lines(),
            game_over: self.game_over,
            winner: self.winner,
        }
    }
}

/// Decide the winner from which sides still have units standing
///
/// Returns `None` while both sides are alive.
pub fn winner_by_survival(user_alive: bool, cpu_alive: bool) -> Option<Winner> {
    match (user_alive, cpu_alive) {
        (true, true) => None,
        (true, false) => Some(Winner::User),
        (false, true) => Some(Winner::Cpu),
        (false, false) => Some(Winner::Draw),
    }
}

/// Decide the winner by comparing remaining health; ties are draws
pub fn winner_by_health(user_health: f64, cpu_health: f64) -> Winner {
    if user_health > cpu_health {
        Winner::User
    } else if cpu_health > user_health {
        Winner::Cpu
    } else {
        Winner::Draw
    }
}
