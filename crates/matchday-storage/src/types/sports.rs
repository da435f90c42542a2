//! Sport and skill-level enums shared by profiles and matches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sport a profile advertises or a match is played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Tennis,
    Basketball,
}

impl Sport {
    /// Fixed capacity per sport. Never caller-supplied.
    pub fn max_players(&self) -> usize {
        match self {
            Sport::Football => 12,
            Sport::Tennis => 4,
            Sport::Basketball => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "Football",
            Sport::Tennis => "Tennis",
            Sport::Basketball => "Basketball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing Sport from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSportError(pub String);

impl fmt::Display for ParseSportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sport: {}", self.0)
    }
}

impl std::error::Error for ParseSportError {}

impl FromStr for Sport {
    type Err = ParseSportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Football" => Ok(Sport::Football),
            "Tennis" => Ok(Sport::Tennis),
            "Basketball" => Ok(Sport::Basketball),
            _ => Err(ParseSportError(s.to_string())),
        }
    }
}

/// Self-declared skill level on a profile. `Advanced` is gated behind
/// administrative approval (see `Profile::approved_advanced`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing SkillLevel from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSkillLevelError(pub String);

impl fmt::Display for ParseSkillLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid skill level: {}", self.0)
    }
}

impl std::error::Error for ParseSkillLevelError {}

impl FromStr for SkillLevel {
    type Err = ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            _ => Err(ParseSkillLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_table() {
        assert_eq!(Sport::Football.max_players(), 12);
        assert_eq!(Sport::Tennis.max_players(), 4);
        assert_eq!(Sport::Basketball.max_players(), 6);
    }

    #[test]
    fn sport_round_trips_through_display() {
        for sport in [Sport::Football, Sport::Tennis, Sport::Basketball] {
            assert_eq!(sport.to_string().parse::<Sport>().unwrap(), sport);
        }
    }

    #[test]
    fn unknown_sport_is_rejected() {
        let err = "Cricket".parse::<Sport>().unwrap_err();
        assert_eq!(err, ParseSportError("Cricket".to_string()));
    }

    #[test]
    fn skill_level_parse() {
        assert_eq!(
            "Intermediate".parse::<SkillLevel>().unwrap(),
            SkillLevel::Intermediate
        );
        assert!("advanced".parse::<SkillLevel>().is_err());
    }
}
