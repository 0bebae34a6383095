//! Parsing of a single line typed at the quiz prompt

/// Slash commands understood by the REPL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Retry,
    Next,
    Score,
    Reset,
    Help,
    Quit,
}

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Blank line
    Empty,
    /// Zero-based option position (the user types 1-based)
    Answer(usize),
    Command(ReplCommand),
    /// Anything else, kept for the error message
    Unknown(String),
}

/// Parse one line of user input.
///
/// Range checking is left to the engine: `"9"` parses as `Answer(8)` even
/// if only four options exist.
pub fn parse_input(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }

    if line.starts_with('/') {
        let command = match line.to_lowercase().as_str() {
            "/retry" | "/r" => ReplCommand::Retry,
            "/next" | "/skip" | "/n" => ReplCommand::Next,
            "/score" | "/s" => ReplCommand::Score,
            "/reset" => ReplCommand::Reset,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => return ReplInput::Unknown(line.to_string()),
        };
        return ReplInput::Command(command);
    }

    match line.parse::<usize>() {
        Ok(n) if n >= 1 => ReplInput::Answer(n - 1),
        _ => ReplInput::Unknown(line.to_string()),
    }
}
