//! Command line parsing for the input stage
//!
//! Supports:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:reboot` → start over from the boot log
//! - `:save [path]` → write the reading as plain text
//! - `:html [path]` → write the reading as a standalone page
//! - anything else → the query to transmit

use crate::app::AppEvent;
use std::path::PathBuf;

/// Commands that can be parsed from the input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Reboot,
    SaveLog(Option<String>),
    SaveHtml(Option<String>),
    Query(String),
    Unknown(String),
}

/// Parse the input line into a Command
///
/// Blank input is a valid query: the oracle substitutes its own question.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    let Some(cmd) = input.strip_prefix(':') else {
        return Command::Query(input.to_string());
    };

    let (name, arg) = match cmd.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (cmd, None),
    };
    let arg = arg.map(str::to_string);

    match (name, arg) {
        ("q" | "quit", None) => Command::Quit,
        ("h" | "help", None) => Command::Help,
        ("reboot", None) => Command::Reboot,
        ("save", path) => Command::SaveLog(path),
        ("html", path) => Command::SaveHtml(path),
        _ => Command::Unknown(input.to_string()),
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Reboot => AppEvent::Reboot,
        Command::SaveLog(path) => AppEvent::SaveLog(path.map(PathBuf::from)),
        Command::SaveHtml(path) => AppEvent::SaveHtml(path.map(PathBuf::from)),
        Command::Query(query) => AppEvent::Transmit(query),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
