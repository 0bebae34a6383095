//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod game;
mod output;
mod score;

pub use catalog::FileCatalogConfig;
pub use game::FileGameConfig;
pub use output::FileOutputConfig;
pub use score::FileScoreConfig;

use breed_quiz_application::config::{MAX_OPTION_COUNT, MIN_OPTION_COUNT};
use serde::{Deserialize, Serialize};

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the offending field, e.g. `game.option_count`
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote catalog settings
    pub catalog: FileCatalogConfig,
    /// Quiz rules
    pub game: FileGameConfig,
    /// Score persistence
    pub score: FileScoreConfig,
    /// Terminal output
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every warning found.
    ///
    /// Nothing here is fatal: out-of-range values are clamped when the
    /// config is applied.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.catalog.base_url.trim().is_empty() {
            warnings.push(ConfigWarning {
                field: "catalog.base_url".to_string(),
                message: "catalog.base_url is empty; requests will fail".to_string(),
            });
        }

        if self.catalog.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                field: "catalog.timeout_secs".to_string(),
                message: "catalog.timeout_secs cannot be 0, using 1".to_string(),
            });
        }

        if self.game.option_count < MIN_OPTION_COUNT {
            warnings.push(ConfigWarning {
                field: "game.option_count".to_string(),
                message: format!(
                    "game.option_count {} is below {}, using {}",
                    self.game.option_count, MIN_OPTION_COUNT, MIN_OPTION_COUNT
                ),
            });
        } else if self.game.option_count > MAX_OPTION_COUNT {
            warnings.push(ConfigWarning {
                field: "game.option_count".to_string(),
                message: format!(
                    "game.option_count {} is above {}, using {}",
                    self.game.option_count, MAX_OPTION_COUNT, MAX_OPTION_COUNT
                ),
            });
        }

        if !self.score.persist && self.score.path.is_some() {
            warnings.push(ConfigWarning {
                field: "score.path".to_string(),
                message: "score.path is set but score.persist = false; it will be ignored"
                    .to_string(),
            });
        }

        warnings
    }
}
