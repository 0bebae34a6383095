//! Quiz engine configuration.

use breed_quiz_domain::{AnswerPolicy, DEFAULT_OPTION_COUNT};

/// Smallest option count that still makes a question
pub const MIN_OPTION_COUNT: usize = 2;

/// Largest option count offered per question
pub const MAX_OPTION_COUNT: usize = 10;

/// Behavior knobs for [`QuizEngine`](crate::QuizEngine).
///
/// Set at startup and static for the engine's lifetime. The default is
/// four options per question; any other `option_count` is an opt-in
/// departure from that, clamped to [`MIN_OPTION_COUNT`]..=[`MAX_OPTION_COUNT`].
/// A catalog smaller than the count still yields fewer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    answer_policy: AnswerPolicy,
    option_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            answer_policy: AnswerPolicy::default(),
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

impl QuizConfig {
    pub fn new(answer_policy: AnswerPolicy, option_count: usize) -> Self {
        Self {
            answer_policy,
            option_count: option_count.clamp(MIN_OPTION_COUNT, MAX_OPTION_COUNT),
        }
    }

    pub fn with_answer_policy(mut self, policy: AnswerPolicy) -> Self {
        self.answer_policy = policy;
        self
    }

    /// Values outside [`MIN_OPTION_COUNT`]..=[`MAX_OPTION_COUNT`] are clamped.
    pub fn with_option_count(mut self, count: usize) -> Self {
        self.option_count = count.clamp(MIN_OPTION_COUNT, MAX_OPTION_COUNT);
        self
    }

    pub fn answer_policy(&self) -> AnswerPolicy {
        self.answer_policy
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = QuizConfig::default();
        assert_eq!(config.answer_policy(), AnswerPolicy::SingleAttempt);
        assert_eq!(config.option_count(), 4);
    }

    #[test]
    fn test_option_count_clamped() {
        assert_eq!(QuizConfig::default().with_option_count(0).option_count(), 2);
        assert_eq!(QuizConfig::new(AnswerPolicy::TwoStrike, 1).option_count(), 2);
        assert_eq!(QuizConfig::default().with_option_count(6).option_count(), 6);
    }

    #[test]
    fn test_option_count_capped() {
        assert_eq!(QuizConfig::default().with_option_count(500).option_count(), MAX_OPTION_COUNT);
        assert_eq!(
            QuizConfig::new(AnswerPolicy::SingleAttempt, usize::MAX).option_count(),
            MAX_OPTION_COUNT
        );
    }
}
