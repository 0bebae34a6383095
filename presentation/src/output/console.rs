//! Console output formatter for the quiz

use breed_quiz_domain::{AnswerOutcome, Question};
use colored::Colorize;

/// Formats quiz screens for console display
pub struct QuizFormatter;

impl QuizFormatter {
    /// Banner shown once at startup
    pub fn welcome(score: u32, policy: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│              Dog Breed Quiz                 │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Score:".cyan().bold(),
            score,
            "Rules:".cyan().bold(),
            policy
        ));
        output.push_str(&format!(
            "{}\n",
            "Type the number of your answer, or /help for commands.".dimmed()
        ));
        output
    }

    /// A loaded question: photo URL plus numbered options
    pub fn question(question: &Question, score: u32) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!("Score: {}", score)));
        output.push_str(&format!(
            "{} {}\n\n",
            "Photo:".cyan().bold(),
            question.image_url().as_str().underline()
        ));
        output.push_str(&format!("{}\n", "Which breed is this?".bold()));

        for (i, breed) in question.options().iter().enumerate() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{})", i + 1).yellow().bold(),
                breed.display_name()
            ));
        }

        output
    }

    /// Feedback for an answer
    pub fn outcome(outcome: &AnswerOutcome, score: u32) -> String {
        match outcome {
            AnswerOutcome::Correct => format!(
                "{} {} {}",
                "v".green(),
                "Correct!".green().bold(),
                format!("Score: {}", score).dimmed()
            ),
            AnswerOutcome::IncorrectRetryAllowed => {
                format!("{} {}", "x".red(), "Not quite. Try once more.".yellow())
            }
            AnswerOutcome::Incorrect { correct_breed } => format!(
                "{} {} It was {}.",
                "x".red(),
                "Wrong.".red().bold(),
                correct_breed.display_name().bold()
            ),
            AnswerOutcome::Invalid => format!("{}", "No question to answer right now.".dimmed()),
        }
    }

    /// A `Failed` state, with the hint to retry
    pub fn failure(message: &str) -> String {
        format!(
            "{} {}\n{}",
            "Error:".red().bold(),
            message,
            "Type /retry to try again.".dimmed()
        )
    }

    /// Answer number out of range for the current question
    pub fn out_of_range(option_count: usize) -> String {
        format!(
            "{}",
            format!("Pick a number from 1 to {}.", option_count).yellow()
        )
    }

    pub fn score(score: u32) -> String {
        format!("{} {}", "Score:".cyan().bold(), score)
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("Commands:\n");
        output.push_str("  1..N              - Answer with that option\n");
        output.push_str("  /retry, /r        - Retry after an error\n");
        output.push_str("  /next, /skip      - Skip to a new photo\n");
        output.push_str("  /score, /s        - Show the current score\n");
        output.push_str("  /reset            - Reset the score to 0\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /quit, /exit, /q  - Exit the quiz\n");
        output
    }

    pub fn unknown(input: &str) -> String {
        format!(
            "Unknown input: {}\nType /help for available commands",
            input
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breed_quiz_domain::{Breed, ImageUrl};

    fn sample_question() -> Question {
        Question::new(
            ImageUrl::parse("https://images.dog.ceo/breeds/akita/1.jpg").unwrap(),
            Breed::new("akita"),
            vec![
                Breed::with_sub_breed("bulldog", "french"),
                Breed::new("akita"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_question_lists_numbered_options() {
        let output = QuizFormatter::question(&sample_question(), 3);
        assert!(output.contains("Score: 3"));
        assert!(output.contains("https://images.dog.ceo/breeds/akita/1.jpg"));
        assert!(output.contains("1)"));
        assert!(output.contains("Bulldog (French)"));
        assert!(output.contains("2)"));
        assert!(output.contains("Akita"));
        assert!(!output.contains("3)"));
    }

    #[test]
    fn test_incorrect_reveals_breed() {
        let outcome = AnswerOutcome::Incorrect {
            correct_breed: Breed::with_sub_breed("bulldog", "french"),
        };
        let output = QuizFormatter::outcome(&outcome, 0);
        assert!(output.contains("Bulldog (French)"));
    }

    #[test]
    fn test_correct_shows_score() {
        let output = QuizFormatter::outcome(&AnswerOutcome::Correct, 5);
        assert!(output.contains("Correct!"));
        assert!(output.contains("Score: 5"));
    }

    #[test]
    fn test_failure_mentions_retry() {
        let output = QuizFormatter::failure("Failed to load image. Please try again.");
        assert!(output.contains("Failed to load image. Please try again."));
        assert!(output.contains("/retry"));
    }

    #[test]
    fn test_help_lists_commands() {
        let help = QuizFormatter::help();
        for cmd in ["/retry", "/next", "/score", "/reset", "/help", "/quit"] {
            assert!(help.contains(cmd), "missing {}", cmd);
        }
    }
}
