//! Breed Quiz CLI entrypoint
//!
//! This is the main entrypoint that wires together all layers
//! using dependency injection.

use anyhow::{Context, Result};
use breed_quiz_application::{InMemoryScoreStore, QuizEngine, ScoreStore};
use breed_quiz_infrastructure::{ConfigLoader, DogApiCatalog, FileConfig, FileScoreStore};
use breed_quiz_presentation::{Cli, OutputConfig, QuizRepl};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Breed Quiz");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    for warning in config.validate() {
        warn!(field = %warning.field, "{}", warning.message);
        eprintln!("Warning: {}", warning.message);
    }

    // === Dependency Injection ===
    let catalog = Arc::new(
        DogApiCatalog::with_options(config.catalog.base_url.clone(), config.catalog.timeout())
            .context("Failed to create Dog API client")?,
    );

    let persist = config.score.persist;
    match config.score.resolved_path().filter(|_| persist) {
        Some(path) => {
            info!("Score file: {}", path.display());
            let store = Arc::new(FileScoreStore::new(path));
            run_quiz(catalog, store, &config, &cli).await
        }
        None => {
            if persist {
                warn!("No data directory found; score will not be saved");
            }
            let store = Arc::new(InMemoryScoreStore::new());
            run_quiz(catalog, store, &config, &cli).await
        }
    }
}

async fn run_quiz<S: ScoreStore + 'static>(
    catalog: Arc<DogApiCatalog>,
    store: Arc<S>,
    config: &FileConfig,
    cli: &Cli,
) -> Result<()> {
    let mut engine = QuizEngine::with_config(catalog, store, config.game.to_quiz_config());
    if cli.reset_score {
        engine.reset_score();
    }

    let output = OutputConfig::default()
        .with_color(config.output.color)
        .with_progress(!cli.quiet)
        .with_delays(config.output.correct_delay_ms, config.output.reveal_delay_ms);

    let mut repl = QuizRepl::new(engine, output);
    repl.run().await.context("Terminal input failed")?;

    info!(score = repl.engine().score(), "Quiz finished");
    Ok(())
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(policy) = cli.answer_policy {
        config.game.answer_policy = policy;
    }
    if let Some(count) = cli.option_count {
        config.game.option_count = count;
    }
    if let Some(url) = &cli.base_url {
        config.catalog.base_url = url.clone();
    }
    if let Some(path) = &cli.score_file {
        config.score.path = Some(path.clone());
    }
    if cli.no_persist {
        config.score.persist = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the level. With a log file, output goes through a
/// non-blocking writer so it never interleaves with the quiz.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
