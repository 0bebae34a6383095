//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod quiz_engine;
