use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pokemap_battle::BattleRules;
use pokemap_team::TeamConfig;
use serde::Deserialize;

/// Contents of `arena.toml`; every section and key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub rules: BattleRules,
    pub teams: TeamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl ArenaConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: ArenaConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let teams = &self.teams;
        if teams.user_size == 0 || teams.cpu_size == 0 {
            anyhow::bail!("team sizes must be positive");
        }
        if teams.squad_size == 0 || teams.squad_size > teams.user_size {
            anyhow::bail!(
                "squad size {} must be between 1 and the user team size {}",
                teams.squad_size,
                teams.user_size
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokemap_team::PolicyKind;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = ArenaConfig::from_toml("").unwrap();
        assert_eq!(cfg, ArenaConfig::default());
        assert_eq!(cfg.rules.max_turns, 10);
        assert_eq!(cfg.teams.user_size, 7);
        assert_eq!(cfg.teams.cpu_size, 3);
        assert_eq!(cfg.teams.squad_size, 3);
        assert_eq!(cfg.teams.min_pool, 10);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let cfg = ArenaConfig::from_toml(
            r#"
            [rules]
            max_turns = 20

            [teams]
            policy = "bulwark"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.rules.max_turns, 20);
        assert_eq!(cfg.teams.policy, PolicyKind::Bulwark);
        assert_eq!(cfg.teams.user_size, 7);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_squad_larger_than_team_rejected() {
        let result = ArenaConfig::from_toml(
            r#"
            [teams]
            user_size = 2
            squad_size = 3
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(ArenaConfig::from_toml("[teams]\npolicy = \"glass\"").is_err());
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(ArenaConfig::load(None).unwrap(), ArenaConfig::default());
    }
}
