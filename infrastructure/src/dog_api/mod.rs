//! Dog CEO API adapter
//!
//! Implements the [`CatalogSource`](breed_quiz_application::CatalogSource)
//! port over HTTP:
//!
//! - `GET {base}/breeds/list/all` → every breed and sub-breed
//! - `GET {base}/breed/{parent}[/{sub}]/images/random` → one photo URL

mod catalog;
mod types;

pub use catalog::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DogApiCatalog};
