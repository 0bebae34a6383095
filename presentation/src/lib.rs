//! Presentation layer for breed-quiz
//!
//! This crate contains the CLI definition, the interactive quiz REPL,
//! console formatting, and the loading spinner.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use game::{LineResult, QuizRepl, ReplCommand, ReplInput, parse_input};
pub use output::console::QuizFormatter;
pub use progress::spinner::LoadingSpinner;
