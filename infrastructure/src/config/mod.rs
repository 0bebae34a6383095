//! Configuration file loading for breed-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BREED_QUIZ_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./breed-quiz.toml` or `./.breed-quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/breed-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigWarning, FileCatalogConfig, FileConfig, FileGameConfig, FileOutputConfig,
    FileScoreConfig,
};
pub use loader::ConfigLoader;
