//! Turn resolution

use tracing::debug;

use super::events::BattleEvent;
use super::result::{BattleResult, winner_by_health, winner_by_survival};
use super::rules::BattleRules;
use crate::error::BattleError;
use crate::types::{BattleSession, Side};

/// Play the next turn of a session using the default rules
pub fn advance(session: BattleSession) -> Result<BattleResult, BattleError> {
    advance_with(session, &BattleRules::default())
}

/// Play the next turn of a session
///
/// Sessions that are already decided, or that have run past
/// `rules.max_turns`, come back unchanged with `game_over` set and the turn
/// counter untouched. Otherwise the user side attacks first and the CPU side
/// answers with whatever it has left standing afterwards.
pub fn advance_with(
    mut session: BattleSession,
    rules: &BattleRules,
) -> Result<BattleResult, BattleError> {
    session.validate()?;

    let user_alive = session.user_team.is_alive();
    let cpu_alive = session.cpu_team.is_alive();
    if let Some(winner) = winner_by_survival(user_alive, cpu_alive) {
        debug!(turn = session.current_turn, %winner, "session already decided");
        return Ok(BattleResult {
            session,
            log: vec![BattleEvent::AlreadyEnded],
            game_over: true,
            winner: Some(winner),
        });
    }

    if session.current_turn > rules.max_turns {
        let user_health = session.user_team.total_alive_health();
        let cpu_health = session.cpu_team.total_alive_health();
        let winner = winner_by_health(user_health, cpu_health);
        debug!(
            turn = session.current_turn,
            user_health, cpu_health, %winner, "turn limit reached"
        );
        return Ok(BattleResult {
            session,
            log: vec![BattleEvent::MaxTurnsReached],
            game_over: true,
            winner: Some(winner),
        });
    }

    let next_turn = session.current_turn.checked_add(1).ok_or_else(|| {
        BattleError::invalid(format!(
            "turn {} is the last representable turn and cannot be played",
            session.current_turn
        ))
    })?;

    let mut log = Vec::new();
    half_step(&mut session, Side::User, &mut log);
    half_step(&mut session, Side::Cpu, &mut log);

    let winner = winner_by_survival(session.user_team.is_alive(), session.cpu_team.is_alive());
    if let Some(winner) = winner {
        log.push(BattleEvent::GameOver { winner });
    }
    debug!(
        turn = session.current_turn,
        user_alive = session.user_team.alive_count(),
        cpu_alive = session.cpu_team.alive_count(),
        game_over = winner.is_some(),
        "turn played"
    );

    session.current_turn = next_turn;
    Ok(BattleResult {
        session,
        log,
        game_over: winner.is_some(),
        winner,
    })
}

/// One side attacks every alive unit of the other side
///
/// Attackers are read from the session as it is now, so a unit that fainted
/// earlier in the same turn does not contribute.
fn half_step(session: &mut BattleSession, attacker: Side, log: &mut Vec<BattleEvent>) {
    let Some(damage) = session.team(attacker).per_target_damage() else {
        debug!(turn = session.current_turn, %attacker, "no units left to attack");
        return;
    };

    let turn = session.current_turn;
    log.push(BattleEvent::Attack {
        turn,
        attacker,
        damage,
    });

    let defender = attacker.opponent();
    let fainted = session.team_mut(defender).apply_damage(damage);
    debug!(turn, %attacker, damage, fainted = fainted.len(), "half-step resolved");

    log.extend(
        fainted
            .into_iter()
            .map(|name| BattleEvent::Faint { side: defender, name }),
    );
}
