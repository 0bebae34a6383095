//! Game configuration from TOML (`[game]` section)

use breed_quiz_application::QuizConfig;
use breed_quiz_domain::{AnswerPolicy, DEFAULT_OPTION_COUNT};
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// `"single_attempt"` or `"two_strike"`
    pub answer_policy: AnswerPolicy,
    /// Options shown per question
    pub option_count: usize,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            answer_policy: AnswerPolicy::default(),
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

impl FileGameConfig {
    pub fn to_quiz_config(&self) -> QuizConfig {
        QuizConfig::new(self.answer_policy, self.option_count)
    }
}
