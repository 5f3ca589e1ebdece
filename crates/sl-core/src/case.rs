//! A generated case: the suspects and everything they will say.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::clue::{generate_clues, get_testimony_for};
use crate::config::CaseConfig;
use crate::error::CaseResult;
use crate::suspect::{Roster, generate_suspects};
use crate::testimony::Testimony;

/// The immutable outcome of generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    roster: Roster,
    testimonies: Vec<Testimony>,
}

impl Case {
    /// Generate suspects, then clues, from a configuration.
    pub fn generate<R: Rng>(config: &CaseConfig, rng: &mut R) -> CaseResult<Self> {
        let roster = generate_suspects(&config.names, config.suspect_count, rng)?;
        let testimonies = generate_clues(
            &roster,
            roster.murderer(),
            &config.time_slots,
            &config.locations,
            rng,
        )?;
        Ok(Self {
            roster,
            testimonies,
        })
    }

    /// Build the RNG the config asks for and generate a case with it.
    ///
    /// Returns the RNG so the caller can keep drawing from the same stream.
    pub fn from_config(config: &CaseConfig) -> CaseResult<(Self, StdRng)> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let case = Self::generate(config, &mut rng)?;
        Ok((case, rng))
    }

    /// The suspects.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The murderer's name.
    pub fn murderer(&self) -> &str {
        self.roster.murderer()
    }

    /// Every testimony, in shuffled order.
    pub fn testimonies(&self) -> &[Testimony] {
        &self.testimonies
    }

    /// Pick one of `name`'s testimonies at random.
    pub fn testimony_for<R: Rng>(&self, name: &str, rng: &mut R) -> Option<&Testimony> {
        get_testimony_for(name, &self.testimonies, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;

    #[test]
    fn default_case() {
        let (case, _) = Case::from_config(&CaseConfig::default().with_seed(42)).unwrap();
        assert_eq!(case.roster().len(), 4);
        assert_eq!(case.testimonies().len(), 6);
        assert!(case.roster().get(case.murderer()).unwrap().is_murderer);
    }

    #[test]
    fn same_seed_same_case() {
        let cfg = CaseConfig::default().with_seed(7);
        let (a, _) = Case::from_config(&cfg).unwrap();
        let (b, _) = Case::from_config(&cfg).unwrap();
        assert_eq!(a.roster(), b.roster());
        assert_eq!(a.testimonies(), b.testimonies());
    }

    #[test]
    fn unseeded_case_generates() {
        let (case, _) = Case::from_config(&CaseConfig::default()).unwrap();
        assert_eq!(case.testimonies().len(), 6);
    }

    #[test]
    fn too_many_suspects() {
        let cfg = CaseConfig::default().with_seed(1).with_suspect_count(7);
        let err = Case::from_config(&cfg).unwrap_err();
        assert_eq!(
            err,
            CaseError::InsufficientCandidates {
                required: 7,
                available: 6
            }
        );
    }

    #[test]
    fn two_suspects_leave_one_innocent() {
        let cfg = CaseConfig::default().with_seed(1).with_suspect_count(2);
        let err = Case::from_config(&cfg).unwrap_err();
        assert_eq!(err, CaseError::InsufficientSuspects { innocents: 1 });
    }

    #[test]
    fn single_location_is_a_configuration_error() {
        let cfg = CaseConfig::default().with_seed(1).with_locations(["library"]);
        let err = Case::from_config(&cfg).unwrap_err();
        assert!(matches!(err, CaseError::Configuration(_)));
    }

    #[test]
    fn custom_pool() {
        let cfg = CaseConfig::default()
            .with_seed(3)
            .with_names(["A", "B", "C", "D"]);
        let (case, _) = Case::from_config(&cfg).unwrap();
        assert!(["A", "B", "C", "D"].contains(&case.murderer()));
        assert_eq!(case.testimonies().len(), 6);
    }
}
