//! Response documents

use serde::{Deserialize, Serialize};

use crate::catalog::UnitRecord;

/// Outcome of a finished battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "User")]
    User,
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "Draw")]
    Draw,
}

impl Winner {
    /// Label used on the wire and in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::User => "User",
            Winner::Cpu => "CPU",
            Winner::Draw => "Draw",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Next session snapshot plus what happened during the call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub user_team: Vec<UnitRecord>,
    pub cpu_team: Vec<UnitRecord>,
    pub current_turn: u32,

    /// Lines produced by this call only
    pub battle_log: Vec<String>,

    pub game_over: bool,

    /// `null` while the battle is still in progress
    pub winner: Option<Winner>,
}

/// Teams offered at the start of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub user_pokemon: Vec<UnitRecord>,
    pub cpu_pokemon: Vec<UnitRecord>,
}

/// Error body with an HTTP-equivalent status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl ErrorResponse {
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL: u16 = 500;

    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(Self::BAD_REQUEST, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(Self::NOT_FOUND, error)
    }

    /// Internal faults are reported without detail
    pub fn internal() -> Self {
        Self::new(Self::INTERNAL, "An internal error occurred.")
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}
