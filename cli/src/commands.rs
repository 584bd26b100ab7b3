//! Command parser for the lookup prompt
//!
//! Parses lines like "search SW1A 1AA", "select 2", etc.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

/// Which address to pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Position in the selector as displayed; 0 is the placeholder
    Number(usize),
    /// Address text, matched by the backend as-is
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up addresses for a postcode (may be empty; the controller rejects it)
    Search { postcode: String },
    Select(Selection),
    Health,
    /// Print the current screen again
    Show,
    Help,
    Quit,
}

/// Parse a command line. Blank lines parse to `None`.
pub fn parse_command(input: &str) -> Result<Option<Command>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    let command = match command.to_lowercase().as_str() {
        "search" | "s" | "postcode" => Command::Search {
            postcode: rest.to_string(),
        },

        "select" | "pick" | "address" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("select".to_string()));
            }
            match rest.parse::<usize>() {
                Ok(number) => Command::Select(Selection::Number(number)),
                Err(_) => Command::Select(Selection::Address(rest.to_string())),
            }
        }

        "health" | "ping" => Command::Health,
        "show" | "status" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,

        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

pub fn help_text() -> &'static str {
    "## Commands\n\n\
     - `search <postcode>` - Find the addresses registered under a postcode\n\
     - `select <n>` - Show the energy rating for address n (0 clears the results)\n\
     - `select <address>` - Show the energy rating for an address by name\n\
     - `health` - Check the backend is reachable\n\
     - `show` - Print the current screen again\n\
     - `help` - Show this help\n\
     - `quit` - Exit\n"
}
