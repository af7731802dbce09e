//! Difficulty grading for catalog nodes.
//!
//! Difficulty is an ordered scale: Beginner < Intermediate < Advanced.
//! The explicit numeric rank is what the query layer sorts by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Difficulty grade of a learning node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns the sort rank (lower = easier): Beginner=1, Intermediate=2, Advanced=3.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    /// Returns the canonical name as it appears in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ModelError;

    /// Parse a difficulty label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BEGINNER" => Ok(Difficulty::Beginner),
            "INTERMEDIATE" => Ok(Difficulty::Intermediate),
            "ADVANCED" => Ok(Difficulty::Advanced),
            _ => Err(ModelError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_ordered() {
        assert!(Difficulty::Beginner.rank() < Difficulty::Intermediate.rank());
        assert!(Difficulty::Intermediate.rank() < Difficulty::Advanced.rank());
        assert!(Difficulty::Beginner < Difficulty::Advanced);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "beginner".parse::<Difficulty>().unwrap(),
            Difficulty::Beginner
        );
        assert_eq!(
            "ADVANCED".parse::<Difficulty>().unwrap(),
            Difficulty::Advanced
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
