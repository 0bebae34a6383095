//! Presentation-level configuration
//!
//! Terminal behavior for the quiz REPL.

use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show the loading spinner
    pub show_progress: bool,
    /// Pause after a correct answer before the next question
    pub correct_delay: Duration,
    /// Pause after revealing the answer before the next question
    pub reveal_delay: Duration,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
            correct_delay: Duration::from_millis(900),
            reveal_delay: Duration::from_millis(2000),
        }
    }
}

impl OutputConfig {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_delays(mut self, correct_ms: u64, reveal_ms: u64) -> Self {
        self.correct_delay = Duration::from_millis(correct_ms);
        self.reveal_delay = Duration::from_millis(reveal_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = OutputConfig::default()
            .with_color(false)
            .with_progress(false)
            .with_delays(0, 5);
        assert!(!config.color);
        assert!(!config.show_progress);
        assert_eq!(config.correct_delay, Duration::ZERO);
        assert_eq!(config.reveal_delay, Duration::from_millis(5));
    }
}
