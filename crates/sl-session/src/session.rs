//! Questioning session management.
//!
//! `Session` owns a generated `Case` and reads from it only. The mutable
//! parts are the testimony log, the clue counter and the phase.

use rand::rngs::StdRng;

use sl_core::{Case, Roster};

use crate::command::{Command, parse_command};
use crate::error::{SessionError, SessionResult};
use crate::log::TestimonyLog;
use crate::reply::{Reply, Verdict};
use crate::truth::TruthLog;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Suspects can be questioned.
    Questioning,
    /// The clue budget is spent; one accusation remains.
    FinalGuess,
    /// The case is closed.
    Closed,
}

/// An interactive questioning session.
pub struct Session {
    case: Case,
    detective: String,
    log: TestimonyLog,
    clues_used: usize,
    max_clues: usize,
    phase: Phase,
    verdict: Option<Verdict>,
    rng: StdRng,
}

impl Session {
    /// Start questioning. The clue budget is the number of testimonies.
    pub fn new(case: Case, detective: impl Into<String>, rng: StdRng) -> Self {
        let max_clues = case.testimonies().len();
        let phase = if max_clues == 0 {
            Phase::FinalGuess
        } else {
            Phase::Questioning
        };
        Self {
            case,
            detective: detective.into(),
            log: TestimonyLog::new(),
            clues_used: 0,
            max_clues,
            phase,
            verdict: None,
            rng,
        }
    }

    /// The detective's name.
    pub fn detective(&self) -> &str {
        &self.detective
    }

    /// The case under investigation.
    pub fn case(&self) -> &Case {
        &self.case
    }

    /// The suspects.
    pub fn roster(&self) -> &Roster {
        self.case.roster()
    }

    /// Alibis heard so far.
    pub fn log(&self) -> &TestimonyLog {
        &self.log
    }

    /// Clues spent.
    pub fn clues_used(&self) -> usize {
        self.clues_used
    }

    /// Total clue budget.
    pub fn max_clues(&self) -> usize {
        self.max_clues
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether only the final accusation is left.
    pub fn awaiting_final_guess(&self) -> bool {
        self.phase == Phase::FinalGuess
    }

    /// Whether the case is closed.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// How the case ended, once it has.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Every testimony with its truthfulness revealed.
    pub fn truth_log(&self) -> TruthLog {
        TruthLog::from_case(&self.case)
    }

    /// Process a line of input.
    ///
    /// Errors are recoverable and leave the session untouched. During the
    /// final guess any input closes the case.
    pub fn process(&mut self, input: &str) -> SessionResult<Reply> {
        match self.phase {
            Phase::Closed => Err(SessionError::GameOver),
            Phase::FinalGuess => Ok(self.final_guess(input)),
            Phase::Questioning => self.question(input),
        }
    }

    fn question(&mut self, input: &str) -> SessionResult<Reply> {
        match parse_command(input)? {
            Command::Exit => Ok(self.close(Reply::Abandoned, None)),
            Command::Help => Ok(Reply::Help),
            Command::Ask { name } => {
                let name = self.resolve(&name)?;
                Ok(self.ask(&name))
            }
            Command::Guess { name } => {
                let name = self.resolve(&name)?;
                Ok(self.close(Reply::Accusation, Some(name)))
            }
            Command::Unknown { verb, name } => {
                self.resolve(&name)?;
                Err(SessionError::UnknownCommand(verb))
            }
        }
    }

    fn final_guess(&mut self, input: &str) -> Reply {
        let typed = match parse_command(input) {
            Ok(Command::Guess { name }) => name,
            _ => {
                tracing::debug!("final guess was malformed");
                return self.forfeit(None);
            }
        };
        match self.resolve(&typed) {
            Ok(name) => self.close(Reply::Accusation, Some(name)),
            Err(_) => self.forfeit(Some(typed)),
        }
    }

    /// Map typed input to the canonical suspect name.
    fn resolve(&self, typed: &str) -> SessionResult<String> {
        self.case
            .roster()
            .find(typed)
            .map(|s| s.name.clone())
            .ok_or_else(|| SessionError::NotASuspect(typed.trim().to_string()))
    }

    fn ask(&mut self, name: &str) -> Reply {
        let testimony = self.case.testimony_for(name, &mut self.rng).cloned();

        self.clues_used += 1;
        if self.clues_used >= self.max_clues {
            self.phase = Phase::FinalGuess;
        }

        let Some(testimony) = testimony else {
            return Reply::NothingUseful {
                speaker: name.to_string(),
            };
        };

        let verified_by = testimony.alibi().and_then(|alibi| {
            self.log.record(name, alibi.clone());
            self.log.corroborate(name, &alibi).map(String::from)
        });
        tracing::debug!(
            suspect = name,
            used = self.clues_used,
            corroborated = verified_by.is_some(),
            "questioned suspect"
        );

        Reply::Statement {
            speaker: testimony.speaker,
            text: testimony.text,
            reliability: testimony.reliability,
            verified_by,
        }
    }

    fn forfeit(&mut self, invalid_name: Option<String>) -> Reply {
        self.close(
            |verdict| Reply::Forfeit {
                invalid_name,
                verdict,
            },
            None,
        )
    }

    fn close(&mut self, wrap: impl FnOnce(Verdict) -> Reply, accused: Option<String>) -> Reply {
        let murderer = self.case.murderer().to_string();
        let solved = accused.as_deref() == Some(murderer.as_str());
        let verdict = Verdict {
            detective: self.detective.clone(),
            accused,
            murderer,
            solved,
        };
        tracing::debug!(solved, "case closed");
        self.phase = Phase::Closed;
        self.verdict = Some(verdict.clone());
        wrap(verdict)
    }
}
