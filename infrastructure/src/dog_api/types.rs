//! Dog CEO API response types
//!
//! Every endpoint wraps its payload as `{"message": ..., "status": "success"}`.

use breed_quiz_domain::{Breed, sort_by_display_name};
use serde::Deserialize;
use std::collections::HashMap;

pub(crate) const STATUS_SUCCESS: &str = "success";

/// `GET /breeds/list/all`
#[derive(Debug, Deserialize)]
pub(crate) struct BreedListResponse {
    /// Parent breed → sub-breeds (empty when the breed has none)
    pub message: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BreedListResponse {
    /// Flatten into breeds, one per sub-breed, sorted by display name.
    pub fn into_breeds(self) -> Vec<Breed> {
        let mut breeds = Vec::with_capacity(self.message.len());

        for (parent, subs) in self.message {
            if parent.is_empty() {
                continue;
            }
            if subs.is_empty() {
                breeds.push(Breed::new(parent));
            } else {
                breeds.extend(
                    subs.into_iter()
                        .map(|sub| Breed::with_sub_breed(parent.clone(), sub)),
                );
            }
        }

        sort_by_display_name(&mut breeds);
        breeds
    }
}

/// `GET /breed/{path}/images/random`
#[derive(Debug, Deserialize)]
pub(crate) struct RandomImageResponse {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// `true` unless the body carries an explicit non-success status
pub(crate) fn is_success(status: Option<&str>) -> bool {
    status.is_none_or(|s| s == STATUS_SUCCESS)
}
