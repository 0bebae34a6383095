//! REPL (Read-Eval-Print Loop) for the interactive quiz

use super::input::{ReplCommand, ReplInput, parse_input};
use crate::{LoadingSpinner, OutputConfig, QuizFormatter};
use breed_quiz_application::{CatalogSource, QuizEngine, ScoreStore};
use breed_quiz_domain::{AnswerOutcome, GameState};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::{debug, warn};

/// Whether the loop should keep reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    Continue,
    Quit,
}

/// Interactive quiz REPL
///
/// Drives a [`QuizEngine`] from typed input and renders whatever state the
/// engine is in after each operation.
pub struct QuizRepl<C: CatalogSource + 'static, S: ScoreStore + 'static> {
    engine: QuizEngine<C, S>,
    config: OutputConfig,
}

impl<C: CatalogSource + 'static, S: ScoreStore + 'static> QuizRepl<C, S> {
    pub fn new(engine: QuizEngine<C, S>, config: OutputConfig) -> Self {
        colored::control::set_override(config.color);
        Self { engine, config }
    }

    pub fn engine(&self) -> &QuizEngine<C, S> {
        &self.engine
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quiz".to_string()),
            DefaultPromptSegment::Empty,
        );

        println!(
            "{}",
            QuizFormatter::welcome(self.engine.score(), self.engine.policy().as_str())
        );
        self.start().await;

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line).await == LineResult::Quit {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Load the catalog and the first question
    pub async fn start(&mut self) {
        let spinner = LoadingSpinner::start("Fetching breeds...", self.config.show_progress);
        self.engine.load_breeds_if_needed().await;
        spinner.finish();
        self.render_state();
    }

    /// Process one line of input
    pub async fn handle_line(&mut self, line: &str) -> LineResult {
        match parse_input(line) {
            ReplInput::Empty => {}
            ReplInput::Answer(index) => self.handle_answer(index).await,
            ReplInput::Command(command) => return self.handle_command(command).await,
            ReplInput::Unknown(input) => println!("{}", QuizFormatter::unknown(&input)),
        }
        LineResult::Continue
    }

    async fn handle_command(&mut self, command: ReplCommand) -> LineResult {
        debug!(?command, "REPL command");
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return LineResult::Quit;
            }
            ReplCommand::Help => println!("{}", QuizFormatter::help()),
            ReplCommand::Score => println!("{}", QuizFormatter::score(self.engine.score())),
            ReplCommand::Reset => {
                self.engine.reset_score();
                println!("{}", QuizFormatter::score(self.engine.score()));
            }
            ReplCommand::Next => self.next_question().await,
            ReplCommand::Retry => {
                let spinner = LoadingSpinner::start("Retrying...", self.config.show_progress);
                self.engine.retry().await;
                spinner.finish();
                self.render_state();
            }
        }
        LineResult::Continue
    }

    async fn handle_answer(&mut self, index: usize) {
        let option_count = match self.engine.state() {
            GameState::Loaded(question) => question.options().len(),
            _ => 0,
        };
        if option_count > 0 && index >= option_count {
            println!("{}", QuizFormatter::out_of_range(option_count));
            return;
        }

        let outcome = self.engine.select_option(index);
        println!("{}", QuizFormatter::outcome(&outcome, self.engine.score()));

        match outcome {
            AnswerOutcome::Correct => {
                tokio::time::sleep(self.config.correct_delay).await;
                self.next_question().await;
            }
            AnswerOutcome::Incorrect { .. } => {
                tokio::time::sleep(self.config.reveal_delay).await;
                self.next_question().await;
            }
            AnswerOutcome::IncorrectRetryAllowed => {}
            AnswerOutcome::Invalid => {
                if let Some(message) = self.engine.state().failure_message() {
                    warn!("Answer while failed: {}", message);
                    println!("{}", QuizFormatter::failure(message));
                }
            }
        }
    }

    async fn next_question(&mut self) {
        let spinner = LoadingSpinner::start("Fetching a new photo...", self.config.show_progress);
        self.engine.advance().await;
        spinner.finish();
        self.render_state();
    }

    fn render_state(&self) {
        match self.engine.state() {
            GameState::Loaded(question) => {
                println!("{}", QuizFormatter::question(question, self.engine.score()))
            }
            GameState::Failed(message) => println!("{}", QuizFormatter::failure(message)),
            GameState::Idle | GameState::Loading => {}
        }
    }
}
