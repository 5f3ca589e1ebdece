//! Error types for case generation.

use thiserror::Error;

/// Result type for case generation.
pub type CaseResult<T> = Result<T, CaseError>;

/// Errors raised while generating suspects or clues.
///
/// Generation is all-or-nothing: every variant is returned before any
/// testimony is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    /// The candidate pool is smaller than the requested suspect count.
    #[error("not enough candidates: need {required}, have {available}")]
    InsufficientCandidates {
        /// Number of suspects requested.
        required: usize,
        /// Number of names in the pool.
        available: usize,
    },

    /// Fewer than two innocents are available to form an alibi pairing.
    #[error("not enough innocent suspects to pair alibis: have {innocents}, need at least 2")]
    InsufficientSuspects {
        /// Number of innocent suspects.
        innocents: usize,
    },

    /// A fixed table cannot support the requested selection.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A name was referenced that is not part of the roster.
    #[error("unknown suspect: {0}")]
    UnknownSuspect(String),

    /// The same name appears twice where names must be unique.
    #[error("duplicate suspect name: {0}")]
    DuplicateName(String),
}
