//! Squad selection: the user picks which offered units go into battle

use std::collections::HashSet;

use pokemap_battle::{BattleSession, TeamState};
use tracing::debug;

use crate::error::TeamError;
use crate::initializer::StartingTeams;

/// Pick exactly `squad_size` distinct units out of `offered`, by species number
///
/// The squad keeps the order of `picks`.
pub fn select_squad(
    offered: &TeamState,
    picks: &[u32],
    squad_size: usize,
) -> Result<TeamState, TeamError> {
    if picks.len() != squad_size {
        return Err(TeamError::WrongSquadSize {
            expected: squad_size,
            actual: picks.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut squad = Vec::with_capacity(picks.len());
    for &id in picks {
        if !seen.insert(id) {
            return Err(TeamError::DuplicatePick(id));
        }
        let unit = offered.find_by_id(id).ok_or(TeamError::UnknownPick(id))?;
        squad.push(unit.clone());
    }

    debug!(?picks, "squad selected");
    Ok(TeamState::new(squad))
}

impl StartingTeams {
    /// Confirm the user's picks and open the battle at turn 1
    pub fn into_session(self, picks: &[u32], squad_size: usize) -> Result<BattleSession, TeamError> {
        let squad = select_squad(&self.user, picks, squad_size)?;
        Ok(BattleSession::new(squad, self.cpu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokemap_battle::{BaseStats, BattleUnit, Creature, Type};

    fn offered() -> TeamState {
        [(4, "Charmander"), (7, "Squirtle"), (1, "Bulbasaur"), (25, "Pikachu")]
            .into_iter()
            .map(|(id, name)| {
                let creature = Creature::new(id, name, Type::Normal, BaseStats::default());
                BattleUnit::new(creature, 50.0, 10.0)
            })
            .collect()
    }

    #[test]
    fn test_select_squad_keeps_pick_order() {
        let squad = select_squad(&offered(), &[25, 4, 7], 3).unwrap();
        let names: Vec<_> = squad.units.iter().map(|u| u.name()).collect();
        assert_eq!(names, vec!["Pikachu", "Charmander", "Squirtle"]);
    }

    #[test]
    fn test_select_squad_wrong_size() {
        assert_eq!(
            select_squad(&offered(), &[25, 4], 3).unwrap_err(),
            TeamError::WrongSquadSize {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_select_squad_duplicate() {
        assert_eq!(
            select_squad(&offered(), &[25, 4, 25], 3).unwrap_err(),
            TeamError::DuplicatePick(25)
        );
    }

    #[test]
    fn test_select_squad_unknown() {
        assert_eq!(
            select_squad(&offered(), &[25, 4, 150], 3).unwrap_err(),
            TeamError::UnknownPick(150)
        );
    }

    #[test]
    fn test_into_session() {
        let teams = StartingTeams {
            user: offered(),
            cpu: offered(),
        };
        let session = teams.into_session(&[1, 7, 4], 3).unwrap();

        assert_eq!(session.current_turn, 1);
        assert_eq!(session.user_team.len(), 3);
        assert_eq!(session.cpu_team.len(), 4);
        assert!(session.validate().is_ok());
    }
}
