//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["breed-quiz.toml", ".breed-quiz.toml"];

/// Environment variable prefix, e.g. `BREED_QUIZ_GAME__OPTION_COUNT=6`
const ENV_PREFIX: &str = "BREED_QUIZ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BREED_QUIZ_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./breed-quiz.toml` or `./.breed-quiz.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/breed-quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load a single file on top of defaults, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `$XDG_CONFIG_HOME/breed-quiz/config.toml` (or the platform equivalent)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("breed-quiz").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./breed-quiz.toml or ./.breed-quiz.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breed_quiz_domain::AnswerPolicy;
    use figment::Jail;

    /// Point the global config lookup into the jail so the host's
    /// real config file is never read
    fn isolate_global(jail: &mut Jail) -> PathBuf {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        xdg
    }

    fn load_in_jail(path: Option<&str>) -> figment::error::Result<FileConfig> {
        let path = path.map(PathBuf::from);
        ConfigLoader::load(path.as_ref()).map_err(|e| *e)
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.game.option_count, 4);
        assert!(config.score.persist);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("breed-quiz"));
        }
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[game]
answer_policy = "two_strike"

[output]
reveal_delay_ms = 10
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.game.answer_policy, AnswerPolicy::TwoStrike);
        assert_eq!(config.game.option_count, 4);
        assert_eq!(config.output.reveal_delay_ms, 10);
        assert_eq!(config.output.correct_delay_ms, 900);
    }

    #[test]
    fn test_load_file_rejects_bad_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\noption_count = \"four\"\n").unwrap();

        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let config = load_in_jail(None)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file("breed-quiz.toml", "[game]\noption_count = 5\n")?;

            let config = load_in_jail(None)?;
            assert_eq!(config.game.option_count, 5);
            assert_eq!(config.game.answer_policy, AnswerPolicy::SingleAttempt);
            assert!(config.score.persist);
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file_is_found() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(".breed-quiz.toml", "[output]\ncolor = false\n")?;

            let config = load_in_jail(None)?;
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_project_file_overrides_global_file() {
        Jail::expect_with(|jail| {
            let xdg = isolate_global(jail);
            std::fs::create_dir_all(xdg.join("breed-quiz")).map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/breed-quiz/config.toml",
                "[game]\noption_count = 3\nanswer_policy = \"two_strike\"\n",
            )?;
            jail.create_file("breed-quiz.toml", "[game]\noption_count = 5\n")?;

            let config = load_in_jail(None)?;
            assert_eq!(config.game.option_count, 5);
            // Keys the project file leaves out still come from the global file
            assert_eq!(config.game.answer_policy, AnswerPolicy::TwoStrike);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "breed-quiz.toml",
                "[game]\noption_count = 5\nanswer_policy = \"two_strike\"\n",
            )?;
            jail.create_file("custom.toml", "[game]\noption_count = 6\n")?;

            let config = load_in_jail(Some("custom.toml"))?;
            assert_eq!(config.game.option_count, 6);
            assert_eq!(config.game.answer_policy, AnswerPolicy::TwoStrike);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                "custom.toml",
                "[game]\noption_count = 5\n\n[score]\npersist = true\n",
            )?;
            jail.set_env("BREED_QUIZ_GAME__OPTION_COUNT", 7);
            jail.set_env("BREED_QUIZ_GAME__ANSWER_POLICY", "two-strike");
            jail.set_env("BREED_QUIZ_SCORE__PERSIST", false);

            let config = load_in_jail(Some("custom.toml"))?;
            assert_eq!(config.game.option_count, 7);
            assert_eq!(config.game.answer_policy, AnswerPolicy::TwoStrike);
            assert!(!config.score.persist);
            Ok(())
        });
    }

    #[test]
    fn test_load_reports_bad_env_value() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.set_env("BREED_QUIZ_GAME__OPTION_COUNT", "lots");

            assert!(load_in_jail(None).is_err());
            Ok(())
        });
    }
}
