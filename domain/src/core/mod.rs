//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string::capitalize_words`] - title-casing used for breed display names

pub mod error;
pub mod string;
