//! Loading spinner shown while the engine is fetching

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for the `Loading` state
pub struct LoadingSpinner {
    bar: ProgressBar,
}

impl LoadingSpinner {
    /// Start a spinner with `message`; hidden when `visible` is false
    pub fn start(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_finishes() {
        let spinner = LoadingSpinner::start("Fetching...", false);
        assert!(spinner.bar.is_hidden());
        spinner.finish();
    }
}
