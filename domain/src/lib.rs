//! Domain layer for breed-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Breed
//!
//! A breed (or sub-breed) from the remote catalog, identified by its
//! lower-case taxonomy key. Display names and catalog path keys are
//! derived from it.
//!
//! ## Question
//!
//! One quiz round: a photo URL, the correct breed, and a shuffled list of
//! distinct options containing the correct breed exactly once.
//!
//! ## GameState
//!
//! `Idle` → `Loading` → `Loaded(Question)` or `Failed(message)`.

pub mod breed;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use breed::entities::{Breed, sort_by_display_name};
pub use core::error::DomainError;
pub use quiz::{
    answer::{AnswerOutcome, AnswerPolicy},
    question::Question,
    sampling::{DEFAULT_OPTION_COUNT, draw_options, pick_correct},
    state::GameState,
    value_objects::ImageUrl,
};
