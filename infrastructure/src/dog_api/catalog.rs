//! Dog CEO API catalog implementation

use super::types::{BreedListResponse, RandomImageResponse, is_success};
use async_trait::async_trait;
use breed_quiz_application::ports::catalog_source::{CatalogError, CatalogSource};
use breed_quiz_domain::{Breed, ImageUrl};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Public Dog CEO API endpoint
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// [`CatalogSource`] backed by the Dog CEO HTTP API
pub struct DogApiCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl DogApiCatalog {
    /// Create a client for the public API with the default timeout
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_options(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client for a custom base URL (mirrors, tests)
    pub fn with_options(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("breed-quiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for DogApiCatalog {
    async fn fetch_all_breeds(&self) -> Result<Vec<Breed>, CatalogError> {
        let url = self.endpoint("breeds/list/all");
        let response: BreedListResponse = self.get_json(&url).await?;

        if !is_success(response.status.as_deref()) {
            return Err(CatalogError::Unavailable(format!(
                "Breed list returned status {:?}",
                response.status
            )));
        }

        let breeds = response.into_breeds();
        debug!(count = breeds.len(), "Fetched breed list");
        Ok(breeds)
    }

    async fn fetch_random_image(&self, breed: &Breed) -> Result<ImageUrl, CatalogError> {
        let url = self.endpoint(&format!("breed/{}/images/random", breed.path_key()));
        let response: RandomImageResponse = self.get_json(&url).await?;

        if !is_success(response.status.as_deref()) {
            return Err(CatalogError::Unavailable(format!(
                "Image lookup for {} returned status {:?}",
                breed.path_key(),
                response.status
            )));
        }

        let parsed = reqwest::Url::parse(response.message.trim())
            .map_err(|e| CatalogError::InvalidImageUrl(format!("{}: {}", response.message, e)))?;

        ImageUrl::parse(parsed.as_str()).map_err(|e| CatalogError::InvalidImageUrl(e.to_string()))
    }
}
