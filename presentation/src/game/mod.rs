//! Interactive quiz module
//!
//! Provides a line-based terminal front end for the quiz engine.

mod input;
mod repl;

pub use input::{ReplCommand, ReplInput, parse_input};
pub use repl::{LineResult, QuizRepl};
