//! What the session says back after each command.

use serde::{Deserialize, Serialize};

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The detective's name.
    pub detective: String,
    /// Who was accused, if anyone.
    pub accused: Option<String>,
    /// The real murderer.
    pub murderer: String,
    /// Whether the accusation was correct.
    pub solved: bool,
}

/// The response to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A suspect gave a statement.
    Statement {
        /// Who spoke.
        speaker: String,
        /// What they said.
        text: String,
        /// Apparent reliability, 0-100.
        reliability: u8,
        /// Another suspect whose earlier statement matches, if any.
        verified_by: Option<String>,
    },
    /// The suspect had nothing to say.
    NothingUseful {
        /// Who was asked.
        speaker: String,
    },
    /// The command reference.
    Help,
    /// An accusation was made and the case is closed.
    Accusation(Verdict),
    /// The detective walked away.
    Abandoned(Verdict),
    /// The final guess was malformed or named a non-suspect.
    Forfeit {
        /// The name that did not match, or `None` for a malformed guess.
        invalid_name: Option<String>,
        /// The closing verdict.
        verdict: Verdict,
    },
}

impl Reply {
    /// The verdict, if this reply closed the case.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Accusation(v) | Self::Abandoned(v) => Some(v),
            Self::Forfeit { verdict, .. } => Some(verdict),
            _ => None,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statement {
                speaker,
                text,
                reliability,
                verified_by,
            } => {
                write!(f, "{speaker} says: \"{text}\"\nReliability: {reliability}/100")?;
                if let Some(other) = verified_by {
                    write!(f, "\nVerified by {other}.")?;
                }
                Ok(())
            }
            Self::NothingUseful { speaker } => write!(f, "{speaker} says nothing useful."),
            Self::Help => f.write_str(HELP_TEXT),
            Self::Accusation(v) => {
                let accused = v.accused.as_deref().unwrap_or("nobody");
                writeln!(f, "Detective {} accuses {accused}.\n", v.detective)?;
                if v.solved {
                    write!(f, "CORRECT! You solved the case.")
                } else {
                    write!(f, "WRONG! The real murderer was {}.", v.murderer)
                }
            }
            Self::Abandoned(v) => {
                write!(f, "You left the case unsolved, Detective {}.", v.detective)
            }
            Self::Forfeit {
                invalid_name,
                verdict,
            } => {
                match invalid_name {
                    Some(name) => writeln!(f, "Invalid suspect: {name}")?,
                    None => writeln!(f, "Invalid format. You failed to make a final guess.")?,
                }
                write!(f, "The real murderer was: {}", verdict.murderer)
            }
        }
    }
}

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  ask <name>      Question a suspect (uses one clue)
  guess <name>    Accuse a suspect and close the case
  help            Show this help
  exit            Leave the case unsolved

Two statements naming the same time and place corroborate each other.";

/// The parting line for the detective.
pub fn closing_remark(detective: &str, solved: bool) -> String {
    if solved {
        format!("Brilliant work, Detective {detective}. Evil had no place to hide.")
    } else {
        format!("The truth slipped through your fingers, Detective {detective}. Perhaps next time.")
    }
}
