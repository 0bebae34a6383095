//! Application-level configuration.
//!
//! - [`QuizConfig`] - answer policy and option count for the quiz engine

pub mod quiz_config;

pub use quiz_config::{MAX_OPTION_COUNT, MIN_OPTION_COUNT, QuizConfig};
