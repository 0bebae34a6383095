//! Score persistence configuration from TOML (`[score]` section)

use crate::score::FileScoreStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw score configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoreConfig {
    /// Persist the score between sessions
    pub persist: bool,
    /// Score file location (defaults to the platform data dir)
    pub path: Option<PathBuf>,
}

impl Default for FileScoreConfig {
    fn default() -> Self {
        Self {
            persist: true,
            path: None,
        }
    }
}

impl FileScoreConfig {
    /// Explicit path if configured, otherwise the platform default
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(FileScoreStore::default_path)
    }
}
