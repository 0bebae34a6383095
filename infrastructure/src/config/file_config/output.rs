//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Pause after a correct answer before the next question
    pub correct_delay_ms: u64,
    /// Pause after revealing the correct breed
    pub reveal_delay_ms: u64,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            correct_delay_ms: 900,
            reveal_delay_ms: 2000,
        }
    }
}
