//! Error types for the questioning session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Recoverable input errors. None of these change session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Nothing was typed.
    #[error("empty command")]
    EmptyCommand,

    /// A verb without a name, or otherwise malformed input.
    #[error("invalid format, use: ask <name> or guess <name>")]
    InvalidFormat,

    /// The named person is not on the roster.
    #[error("{0} is not a suspect")]
    NotASuspect(String),

    /// The verb is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The case is already closed.
    #[error("the case is closed")]
    GameOver,
}
