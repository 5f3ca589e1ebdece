//! Core types for Sleuth.
//!
//! Generates a murder case: a roster of suspects with one secret murderer,
//! and a shuffled set of testimonies in which innocents vouch for each
//! other at one shared alibi while the murderer's story stands alone.

pub mod case;
pub mod clue;
pub mod config;
pub mod error;
pub mod suspect;
pub mod testimony;

pub use case::Case;
pub use clue::{assign_partners, generate_clues, get_testimony_for};
pub use config::CaseConfig;
pub use error::{CaseError, CaseResult};
pub use suspect::{Behavior, Motive, Roster, Suspect, generate_suspects};
pub use testimony::{Alibi, Testimony};
