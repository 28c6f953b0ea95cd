//! Machine difficulty tiers.

use crate::error::{ConfigurationIssue, EngineError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the machine picks its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell (tier 1).
    #[strum(to_string = "random", serialize = "easy", serialize = "1")]
    Random,
    /// Win, block, centre, corner, then anything (tier 2).
    #[strum(to_string = "heuristic", serialize = "hard", serialize = "2")]
    Heuristic,
}

impl Difficulty {
    /// Numeric tier (1 or 2).
    pub fn tier(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Heuristic => 2,
        }
    }

    /// Parses a tier name or number, reporting failures as configuration errors.
    pub fn parse_tier(input: &str) -> Result<Self, EngineError> {
        Difficulty::from_str(input.trim())
            .map_err(|_| ConfigurationIssue::UnknownDifficulty(input.to_string()).into())
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Difficulty::Random),
            2 => Ok(Difficulty::Heuristic),
            other => Err(ConfigurationIssue::UnknownDifficulty(other.to_string()).into()),
        }
    }
}
