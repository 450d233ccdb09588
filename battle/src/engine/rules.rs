use serde::Deserialize;

/// Turn limit after which the battle is decided on remaining health
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Tunable battle rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BattleRules {
    /// Last turn that is actually played
    pub max_turns: u32,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}
