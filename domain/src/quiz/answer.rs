//! Answer evaluation: outcomes and policies

use crate::breed::entities::Breed;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Result of submitting an answer for the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The chosen breed was the correct one; score was incremented
    Correct,
    /// Wrong, but another attempt is allowed this round (two-strike policy)
    IncorrectRetryAllowed,
    /// Wrong, and the round is over; carries the breed to reveal
    Incorrect { correct_breed: Breed },
    /// No question was loaded, so nothing was evaluated
    Invalid,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }

    /// Whether the round is decided and the caller should move on
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            AnswerOutcome::Correct | AnswerOutcome::Incorrect { .. }
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnswerOutcome::Correct => "correct",
            AnswerOutcome::IncorrectRetryAllowed => "incorrect_retry_allowed",
            AnswerOutcome::Incorrect { .. } => "incorrect",
            AnswerOutcome::Invalid => "invalid",
        }
    }
}

/// How many wrong attempts a round allows before revealing the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    /// One attempt: any wrong answer reveals the correct breed
    #[default]
    #[serde(alias = "single-attempt")]
    SingleAttempt,
    /// The first wrong answer allows a retry; the second reveals
    #[serde(alias = "two-strike")]
    TwoStrike,
}

impl AnswerPolicy {
    /// Wrong answers tolerated before the round is decided
    pub fn allowed_misses(&self) -> u32 {
        match self {
            AnswerPolicy::SingleAttempt => 0,
            AnswerPolicy::TwoStrike => 1,
        }
    }

    /// Outcome for a wrong answer, given how many misses came before it
    pub fn judge_miss(&self, previous_misses: u32, correct_breed: &Breed) -> AnswerOutcome {
        if previous_misses < self.allowed_misses() {
            AnswerOutcome::IncorrectRetryAllowed
        } else {
            AnswerOutcome::Incorrect {
                correct_breed: correct_breed.clone(),
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnswerPolicy::SingleAttempt => "single_attempt",
            AnswerPolicy::TwoStrike => "two_strike",
        }
    }
}

impl std::fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnswerPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "single_attempt" | "single" => Ok(AnswerPolicy::SingleAttempt),
            "two_strike" | "two" => Ok(AnswerPolicy::TwoStrike),
            other => Err(DomainError::UnknownAnswerPolicy(other.to_string())),
        }
    }
}
