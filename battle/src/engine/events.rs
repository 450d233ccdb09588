//! Battle log entries

use pokemap_protocol::Winner;

use crate::types::Side;

/// Something that happened while advancing a session
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// The session was already decided before this call
    AlreadyEnded,

    /// The turn limit was hit and the winner was decided on remaining health
    MaxTurnsReached,

    /// One side hit every alive unit on the other side
    Attack {
        turn: u32,
        attacker: Side,
        damage: f64,
    },

    /// A unit dropped to zero health
    Faint { side: Side, name: String },

    GameOver { winner: Winner },
}

impl BattleEvent {
    pub fn is_attack_by(&self, side: Side) -> bool {
        matches!(self, BattleEvent::Attack { attacker, .. } if *attacker == side)
    }
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::AlreadyEnded => write!(f, "Game has already ended."),
            BattleEvent::MaxTurnsReached => write!(
                f,
                "Maximum turns reached. Determining winner by remaining health."
            ),
            BattleEvent::Attack {
                turn,
                attacker,
                damage,
            } => write!(
                f,
                "Turn {}: {}'s team deals {:.2} damage to all {} Pokémon.",
                turn,
                attacker,
                damage,
                attacker.opponent()
            ),
            BattleEvent::Faint { side, name } => write!(f, "{}'s {} faints.", side, name),
            BattleEvent::GameOver { winner } => write!(f, "Game Over! {} wins!", winner),
        }
    }
}
