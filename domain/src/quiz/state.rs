//! Game state

use super::question::Question;
use serde::{Deserialize, Serialize};

/// State of the quiz as seen by the presentation layer.
///
/// Exactly one variant is active at a time. Only the engine moves
/// between variants; readers get a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum GameState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A catalog fetch is outstanding
    Loading,
    /// A question is on screen
    Loaded(Question),
    /// The last fetch failed; carries a user-facing message
    Failed(String),
}

impl GameState {
    pub fn as_str(&self) -> &str {
        match self {
            GameState::Idle => "idle",
            GameState::Loading => "loading",
            GameState::Loaded(_) => "loaded",
            GameState::Failed(_) => "failed",
        }
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            GameState::Loaded(question) => Some(question),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            GameState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GameState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GameState::Failed(_))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(GameState::default(), GameState::Idle);
        assert_eq!(GameState::default().as_str(), "idle");
    }

    #[test]
    fn test_failure_message() {
        let state = GameState::Failed("boom".to_string());
        assert!(state.is_failed());
        assert_eq!(state.failure_message(), Some("boom"));
        assert!(state.question().is_none());
        assert!(GameState::Loading.failure_message().is_none());
    }

    #[test]
    fn test_is_loading() {
        assert!(GameState::Loading.is_loading());
        assert!(!GameState::Idle.is_loading());
        assert!(!GameState::Failed("x".to_string()).is_loading());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&GameState::Failed("x".to_string())).unwrap();
        assert_eq!(json, r#"{"state":"failed","data":"x"}"#);
        let json = serde_json::to_string(&GameState::Loading).unwrap();
        assert_eq!(json, r#"{"state":"loading"}"#);
    }
}
