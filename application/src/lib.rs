//! Application layer for breed-quiz
//!
//! This crate contains the quiz engine use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    catalog_source::{CatalogError, CatalogSource},
    score_store::{InMemoryScoreStore, ScoreStore, ScoreStoreError},
};
pub use use_cases::quiz_engine::{LOAD_BREEDS_FAILED, LOAD_IMAGE_FAILED, QuizEngine, QuizError};
