//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid image URL: {0}")]
    InvalidImageUrl(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown answer policy: {0}")]
    UnknownAnswerPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_url_display() {
        let error = DomainError::InvalidImageUrl("not a url".to_string());
        assert_eq!(error.to_string(), "Invalid image URL: not a url");
    }

    #[test]
    fn test_unknown_policy_display() {
        let error = DomainError::UnknownAnswerPolicy("three_strike".to_string());
        assert_eq!(error.to_string(), "Unknown answer policy: three_strike");
    }
}
