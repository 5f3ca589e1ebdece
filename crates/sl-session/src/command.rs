//! Command parsing for player input.

use crate::error::{SessionError, SessionResult};

/// A parsed player command. Names are as typed and not yet checked
/// against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Question a suspect.
    Ask {
        /// The suspect name as typed.
        name: String,
    },
    /// Accuse a suspect, ending the game.
    Guess {
        /// The suspect name as typed.
        name: String,
    },
    /// Show the command reference.
    Help,
    /// Leave the case unsolved.
    Exit,
    /// A verb followed by a name, where the verb is not recognised.
    Unknown {
        /// The verb as typed.
        verb: String,
        /// The name as typed.
        name: String,
    },
}

const ASK_VERBS: &[&str] = &["ask", "question"];
const GUESS_VERBS: &[&str] = &["guess", "accuse"];
const HELP_VERBS: &[&str] = &["help", "?"];
const EXIT_VERBS: &[&str] = &["exit", "quit", "q"];

/// Parse a line of input into a command.
///
/// The verb is the first word; everything after it is the name, so names
/// with spaces survive.
pub fn parse_command(input: &str) -> SessionResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SessionError::EmptyCommand);
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };
    let verb = verb.to_lowercase();

    if rest.is_empty() {
        if EXIT_VERBS.contains(&verb.as_str()) {
            return Ok(Command::Exit);
        }
        if HELP_VERBS.contains(&verb.as_str()) {
            return Ok(Command::Help);
        }
        return Err(SessionError::InvalidFormat);
    }

    let name = rest.to_string();
    if ASK_VERBS.contains(&verb.as_str()) {
        Ok(Command::Ask { name })
    } else if GUESS_VERBS.contains(&verb.as_str()) {
        Ok(Command::Guess { name })
    } else {
        Ok(Command::Unknown { verb, name })
    }
}
