//! Catalog source port
//!
//! Defines the interface for fetching breeds and breed photos from the
//! remote catalog.

use async_trait::async_trait;
use breed_quiz_domain::{Breed, ImageUrl};
use thiserror::Error;

/// Errors that can occur while talking to the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Could not decode catalog response: {0}")]
    Decode(String),

    #[error("Catalog returned an invalid image URL: {0}")]
    InvalidImageUrl(String),
}

/// Source of breeds and breed photos
///
/// Implementations (adapters) live in the infrastructure layer. Any
/// failure, whether transport or decoding, is reported as a
/// [`CatalogError`]; callers treat them all as "catalog unavailable".
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every breed and sub-breed in the catalog.
    ///
    /// The list may be empty only if the remote catalog is genuinely empty.
    async fn fetch_all_breeds(&self) -> Result<Vec<Breed>, CatalogError>;

    /// Fetch the URL of a random photo of `breed`
    async fn fetch_random_image(&self, breed: &Breed) -> Result<ImageUrl, CatalogError>;
}
