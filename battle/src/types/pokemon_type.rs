//! Elemental affinities

use crate::error::BattleError;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse from a catalog string (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Parse a required affinity, rejecting unknown names
    pub fn parse_required(s: &str) -> Result<Self, BattleError> {
        Self::from_protocol(s)
            .ok_or_else(|| BattleError::InvalidInput(format!("unknown type '{}'", s)))
    }

    /// Parse an optional secondary affinity; blank strings count as absent
    pub fn parse_optional(s: Option<&str>) -> Result<Option<Self>, BattleError> {
        match s.map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => Self::parse_required(name).map(Some),
        }
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_protocol() {
        assert_eq!(Type::from_protocol("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_protocol("fire"), Some(Type::Fire));
        assert_eq!(Type::from_protocol("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_protocol(" Psychic "), Some(Type::Psychic));
        assert_eq!(Type::from_protocol("unknown"), None);
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(Type::parse_optional(None).unwrap(), None);
        assert_eq!(Type::parse_optional(Some("")).unwrap(), None);
        assert_eq!(Type::parse_optional(Some("poison")).unwrap(), Some(Type::Poison));
        assert!(Type::parse_optional(Some("Shadow")).is_err());
    }

    #[test]
    fn test_type_as_str() {
        assert_eq!(Type::Fire.as_str(), "Fire");
        assert_eq!(Type::Psychic.to_string(), "Psychic");
        assert_eq!(Type::Normal.as_str(), "Normal");
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::ALL.len(), 18);
        assert_eq!(Type::ALL[0], Type::Normal);
        assert_eq!(Type::ALL[17], Type::Fairy);
    }
}
