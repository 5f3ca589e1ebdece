//! Interactive questioning session for Sleuth.
//!
//! Parses player commands, hands out testimonies from a generated case,
//! cross-checks alibis for corroboration, and resolves the accusation.

pub mod command;
pub mod error;
pub mod log;
pub mod reply;
pub mod session;
pub mod truth;

pub use command::{Command, parse_command};
pub use error::{SessionError, SessionResult};
pub use log::TestimonyLog;
pub use reply::{Reply, Verdict, closing_remark};
pub use session::{Phase, Session};
pub use truth::{TruthEntry, TruthLog};
