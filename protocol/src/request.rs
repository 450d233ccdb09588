//! Turn request document
//!
//! A turn request is a complete session snapshot sent by the caller.

use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::catalog::UnitRecord;

fn first_turn() -> i64 {
    1
}

/// Snapshot of a battle session asking for the next turn to be played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    #[serde(default)]
    pub user_team: Vec<UnitRecord>,

    #[serde(default)]
    pub cpu_team: Vec<UnitRecord>,

    /// Signed so that non-positive counters reach validation instead of
    /// failing as a type mismatch
    #[serde(default = "first_turn")]
    pub current_turn: i64,
}

/// Parse a turn request body
pub fn parse_turn_request(body: &str) -> Result<TurnRequest, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}
