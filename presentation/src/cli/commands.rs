//! CLI command definitions

use breed_quiz_domain::AnswerPolicy;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for breed-quiz
#[derive(Parser, Debug)]
#[command(name = "breed-quiz")]
#[command(author, version, about = "Guess the dog breed from a random photo")]
#[command(long_about = r#"
Breed Quiz shows a random dog photo and asks which breed it is.

Each round:
1. A photo of a randomly chosen breed is fetched from the Dog CEO API
2. Several breed names are offered, exactly one of them correct
3. Answer with the option number; a correct answer scores a point

Configuration files are loaded from (in priority order):
1. BREED_QUIZ_* environment variables (e.g. BREED_QUIZ_GAME__OPTION_COUNT=6)
2. --config <path>          Explicit config file
3. ./breed-quiz.toml        Project-level config
4. ~/.config/breed-quiz/config.toml   Global config

Example:
  breed-quiz
  breed-quiz --answer-policy two-strike --options 6
  breed-quiz --no-persist -vv --log-file quiz.log
"#)]
pub struct Cli {
    /// Answer policy: "single-attempt" or "two-strike"
    #[arg(long, value_name = "POLICY")]
    pub answer_policy: Option<AnswerPolicy>,

    /// Number of options offered per question (2 to 10)
    #[arg(short = 'n', long = "options", value_name = "COUNT")]
    pub option_count: Option<usize>,

    /// Dog CEO API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to the score file
    #[arg(long, value_name = "PATH")]
    pub score_file: Option<PathBuf>,

    /// Keep the score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Reset the saved score to 0 before starting
    #[arg(long)]
    pub reset_score: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
