//! Battle session snapshot

use pokemap_protocol::TurnRequest;

use super::side::{Side, TeamState};
use crate::error::BattleError;

/// A complete, self-contained snapshot of a battle
///
/// The caller owns the session; the engine consumes one snapshot and hands
/// back the next.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSession {
    pub user_team: TeamState,
    pub cpu_team: TeamState,

    /// Turn about to be played (starts at 1)
    pub current_turn: u32,
}

impl BattleSession {
    /// Start a new session at turn 1
    pub fn new(user_team: TeamState, cpu_team: TeamState) -> Self {
        Self {
            user_team,
            cpu_team,
            current_turn: 1,
        }
    }

    /// Build and validate a session from a turn request
    pub fn from_protocol(request: &TurnRequest) -> Result<Self, BattleError> {
        if request.current_turn < 1 {
            return Err(BattleError::invalid(format!(
                "currentTurn must be at least 1, got {}",
                request.current_turn
            )));
        }
        let current_turn = u32::try_from(request.current_turn).map_err(|_| {
            BattleError::invalid(format!(
                "currentTurn {} exceeds the largest turn number {}",
                request.current_turn,
                u32::MAX
            ))
        })?;

        let session = Self {
            user_team: TeamState::from_protocol(&request.user_team)?,
            cpu_team: TeamState::from_protocol(&request.cpu_team)?,
            current_turn,
        };
        session.validate()?;
        Ok(session)
    }

    /// Reject sessions no battle could have produced
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.current_turn < 1 {
            return Err(BattleError::invalid("currentTurn must be at least 1"));
        }
        self.user_team.validate(Side::User)?;
        self.cpu_team.validate(Side::Cpu)
    }

    /// Get a team by side
    pub fn team(&self, side: Side) -> &TeamState {
        match side {
            Side::User => &self.user_team,
            Side::Cpu => &self.cpu_team,
        }
    }

    /// Get a team mutably by side
    pub fn team_mut(&mut self, side: Side) -> &mut TeamState {
        match side {
            Side::User => &mut self.user_team,
            Side::Cpu => &mut self.cpu_team,
        }
    }
}
