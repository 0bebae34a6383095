//! Quiz engine use case
//!
//! Owns the game state machine: loads the breed catalog once, produces
//! questions, scores answers and mirrors the score into a [`ScoreStore`].
//!
//! ```text
//! Idle ──load_breeds_if_needed──▶ Loading ──ok──▶ advance ──▶ Loaded
//!                                    └──err/empty──▶ Failed
//! Loaded/Failed ──advance──▶ Loading ──image ok──▶ Loaded
//!                               └──image err──▶ Failed
//! any ──retry──▶ load_breeds_if_needed (no cache) | advance (cached)
//! ```
//!
//! Every operation takes `&mut self`, so calls are serialized by the
//! borrow checker. A caller that wraps the engine in a lock and lets two
//! `advance` calls interleave gets last-write-wins; the engine does not
//! guard against that.

use crate::config::QuizConfig;
use crate::ports::catalog_source::{CatalogError, CatalogSource};
use crate::ports::score_store::ScoreStore;
use breed_quiz_domain::{
    AnswerOutcome, AnswerPolicy, Breed, DomainError, GameState, Question, draw_options,
    pick_correct, sort_by_display_name,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Shown when the breed list cannot be loaded
pub const LOAD_BREEDS_FAILED: &str = "Failed to load breeds. Please try again.";

/// Shown when the photo for a question cannot be loaded
pub const LOAD_IMAGE_FAILED: &str = "Failed to load image. Please try again.";

/// Reasons the engine moved to [`GameState::Failed`].
///
/// Callers only see the user-facing message; the variant is logged.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[source] CatalogError),

    #[error("Catalog returned no breeds")]
    EmptyCatalog,

    #[error("No breeds loaded")]
    NoBreeds,

    #[error("Image unavailable: {0}")]
    ImageUnavailable(#[source] CatalogError),

    #[error("Could not build question: {0}")]
    InvalidQuestion(#[from] DomainError),
}

impl QuizError {
    /// Message for the presentation layer
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizError::CatalogUnavailable(_) | QuizError::EmptyCatalog | QuizError::NoBreeds => {
                LOAD_BREEDS_FAILED
            }
            QuizError::ImageUnavailable(_) | QuizError::InvalidQuestion(_) => LOAD_IMAGE_FAILED,
        }
    }
}

/// Breed-guessing quiz state machine
pub struct QuizEngine<C: CatalogSource + 'static, S: ScoreStore + 'static> {
    catalog: Arc<C>,
    score_store: Arc<S>,
    config: QuizConfig,
    state: GameState,
    /// Sorted by display name; non-empty once a question has been produced
    breeds: Vec<Breed>,
    score: u32,
    /// Wrong answers given for the current question
    misses: u32,
    rng: StdRng,
}

impl<C: CatalogSource + 'static, S: ScoreStore + 'static> QuizEngine<C, S> {
    pub fn new(catalog: Arc<C>, score_store: Arc<S>) -> Self {
        Self::with_config(catalog, score_store, QuizConfig::default())
    }

    /// Create an engine; the persisted score is read once here.
    pub fn with_config(catalog: Arc<C>, score_store: Arc<S>, config: QuizConfig) -> Self {
        let score = match score_store.read() {
            Ok(score) => score,
            Err(e) => {
                warn!("Could not read stored score, starting from 0: {}", e);
                0
            }
        };

        info!(
            score,
            policy = %config.answer_policy(),
            option_count = config.option_count(),
            "Quiz engine created"
        );

        Self {
            catalog,
            score_store,
            config,
            state: GameState::Idle,
            breeds: Vec::new(),
            score,
            misses: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed RNG seed (deterministic questions)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ==================== Accessors ====================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Cached breeds, sorted by display name
    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.config.answer_policy()
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    // ==================== Operations ====================

    /// Load the breed list unless it is already cached, then produce the
    /// first question.
    pub async fn load_breeds_if_needed(&mut self) {
        if !self.breeds.is_empty() {
            debug!(count = self.breeds.len(), "Breeds already cached");
            return;
        }

        self.state = GameState::Loading;

        match self.fetch_breeds().await {
            Ok(breeds) => {
                info!(count = breeds.len(), "Loaded breed catalog");
                self.breeds = breeds;
                self.advance().await;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Produce the next question.
    ///
    /// The previous question is discarded as soon as loading starts.
    pub async fn advance(&mut self) {
        if self.breeds.is_empty() {
            self.fail(QuizError::NoBreeds);
            return;
        }

        self.state = GameState::Loading;
        self.misses = 0;

        let Some(correct) = pick_correct(&self.breeds, &mut self.rng).cloned() else {
            self.fail(QuizError::NoBreeds);
            return;
        };
        let options = draw_options(
            &self.breeds,
            &correct,
            self.config.option_count(),
            &mut self.rng,
        );
        debug!(
            correct = %correct.path_key(),
            options = ?options.iter().map(Breed::path_key).collect::<Vec<_>>(),
            "Drew question options"
        );

        let image_url = match self.catalog.fetch_random_image(&correct).await {
            Ok(url) => url,
            Err(e) => {
                self.fail(QuizError::ImageUnavailable(e));
                return;
            }
        };

        match Question::new(image_url, correct, options) {
            Ok(question) => {
                info!(image = %question.image_url(), "Question ready");
                self.state = GameState::Loaded(question);
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Re-run whichever step failed: the catalog load when nothing is
    /// cached, otherwise the next question.
    pub async fn retry(&mut self) {
        if self.breeds.is_empty() {
            self.load_breeds_if_needed().await;
        } else {
            self.advance().await;
        }
    }

    /// Judge `breed` against the current question.
    ///
    /// Returns [`AnswerOutcome::Invalid`] unless a question is loaded.
    /// The engine never advances on its own; call [`advance`](Self::advance)
    /// once the outcome has been shown.
    pub fn select_answer(&mut self, breed: &Breed) -> AnswerOutcome {
        let (is_correct, correct_breed) = match &self.state {
            GameState::Loaded(question) => {
                (question.is_correct(breed), question.correct_breed().clone())
            }
            _ => {
                debug!(state = %self.state, "Answer ignored: no question loaded");
                return AnswerOutcome::Invalid;
            }
        };

        if is_correct {
            self.set_score(self.score.saturating_add(1));
            info!(score = self.score, "Correct answer");
            return AnswerOutcome::Correct;
        }

        let outcome = self
            .config
            .answer_policy()
            .judge_miss(self.misses, &correct_breed);
        self.misses = self.misses.saturating_add(1);
        info!(
            guess = %breed.path_key(),
            answer = %correct_breed.path_key(),
            outcome = outcome.as_str(),
            "Incorrect answer"
        );
        outcome
    }

    /// Judge the option at a zero-based display position.
    ///
    /// Out-of-range positions are [`AnswerOutcome::Invalid`].
    pub fn select_option(&mut self, index: usize) -> AnswerOutcome {
        let Some(breed) = self.state.question().and_then(|q| q.option(index)).cloned() else {
            return AnswerOutcome::Invalid;
        };
        self.select_answer(&breed)
    }

    /// Set the score to 0 and persist it.
    pub fn reset_score(&mut self) {
        info!(previous = self.score, "Score reset");
        self.set_score(0);
    }

    /// Drop the cached breed list so the next load refetches it.
    pub fn invalidate_breeds(&mut self) {
        debug!(count = self.breeds.len(), "Breed cache invalidated");
        self.breeds.clear();
    }

    // ==================== Internals ====================

    async fn fetch_breeds(&self) -> Result<Vec<Breed>, QuizError> {
        let mut breeds = self
            .catalog
            .fetch_all_breeds()
            .await
            .map_err(QuizError::CatalogUnavailable)?;

        if breeds.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        sort_by_display_name(&mut breeds);
        Ok(breeds)
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
        if let Err(e) = self.score_store.write(score) {
            warn!("Could not persist score {}: {}", score, e);
        }
    }

    fn fail(&mut self, error: QuizError) {
        warn!("Quiz step failed: {}", error);
        self.state = GameState::Failed(error.user_message().to_string());
    }
}
