//! Whole-battle playback

use pokemap_battle::{BattleError, BattleResult, BattleRules, BattleSession, advance_with};
use pokemap_protocol::Winner;
use serde::Serialize;
use tracing::info;

/// Every log line of a battle, across all turns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub battle_log: Vec<String>,
    pub turns_played: u32,
    pub winner: Option<Winner>,
}

impl Transcript {
    /// Append one engine call
    pub fn record(&mut self, before_turn: u32, result: &BattleResult) {
        self.battle_log.extend(result.log_lines());
        if result.session.current_turn > before_turn {
            self.turns_played += 1;
        }
        if result.game_over {
            self.winner = result.winner;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Advance `session` until the battle is decided
///
/// Always terminates: once the turn counter passes `rules.max_turns` the
/// engine decides the battle on remaining health.
pub fn play_out(
    mut session: BattleSession,
    rules: &BattleRules,
) -> Result<(Transcript, BattleSession), BattleError> {
    let mut transcript = Transcript::default();
    loop {
        let before = session.current_turn;
        let result = advance_with(session, rules)?;
        transcript.record(before, &result);
        session = result.session;
        if transcript.is_finished() {
            break;
        }
    }
    info!(
        turns = transcript.turns_played,
        winner = ?transcript.winner,
        "battle finished"
    );
    Ok((transcript, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokemap_battle::{BaseStats, BattleUnit, Creature, TeamState, Type};

    fn team(units: &[(&str, f64, f64)]) -> TeamState {
        units
            .iter()
            .map(|&(name, health, attack)| {
                let creature = Creature::new(1, name, Type::Water, BaseStats::default());
                BattleUnit::new(creature, health, attack)
            })
            .collect()
    }

    #[test]
    fn test_play_out_collects_every_turn() {
        let session = BattleSession::new(
            team(&[("Squirtle", 100.0, 30.0)]),
            team(&[("Vulpix", 70.0, 10.0)]),
        );
        let (transcript, last) = play_out(session, &BattleRules::default()).unwrap();

        // 30 damage a turn: Vulpix falls on turn 3
        assert_eq!(transcript.turns_played, 3);
        assert_eq!(transcript.winner, Some(Winner::User));
        assert_eq!(last.current_turn, 4);
        assert_eq!(
            transcript.battle_log.first().map(String::as_str),
            Some("Turn 1: User's team deals 30.00 damage to all CPU Pokémon.")
        );
        assert_eq!(
            transcript.battle_log.last().map(String::as_str),
            Some("Game Over! User wins!")
        );
    }

    #[test]
    fn test_play_out_stops_at_turn_limit() {
        let session = BattleSession::new(
            team(&[("Snorlax", 500.0, 1.0)]),
            team(&[("Chansey", 400.0, 1.0)]),
        );
        let rules = BattleRules { max_turns: 3 };
        let (transcript, last) = play_out(session, &rules).unwrap();

        assert_eq!(transcript.turns_played, 3);
        assert_eq!(last.current_turn, 4);
        assert_eq!(transcript.winner, Some(Winner::User));
        assert_eq!(
            transcript.battle_log.last().map(String::as_str),
            Some("Maximum turns reached. Determining winner by remaining health.")
        );
    }

    #[test]
    fn test_play_out_rejects_invalid_session() {
        let session = BattleSession::new(TeamState::default(), team(&[("Ditto", 10.0, 1.0)]));
        assert!(play_out(session, &BattleRules::default()).is_err());
    }
}
