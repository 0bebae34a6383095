//! Infrastructure layer for breed-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dog_api;
pub mod score;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigWarning, FileCatalogConfig, FileConfig, FileGameConfig, FileOutputConfig,
    FileScoreConfig,
};
pub use dog_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DogApiCatalog};
pub use score::FileScoreStore;
