//! Quiz value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Absolute URI of a breed photo (Value Object)
///
/// Only the shape is checked here (`scheme://rest`, no whitespace); the
/// catalog adapter does full URL parsing before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        let Some((scheme, rest)) = trimmed.split_once("://") else {
            return Err(DomainError::InvalidImageUrl(raw));
        };

        let scheme_ok = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

        if !scheme_ok || rest.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidImageUrl(raw));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ImageUrl::parse(value)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}
