//! Suspects and the suspect generator.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CaseError, CaseResult};

/// Why a suspect might have wanted the victim dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motive {
    /// Envy of the victim.
    Jealousy,
    /// Financial gain.
    Money,
    /// Settling an old score.
    Revenge,
    /// Removing a rival.
    Competition,
}

impl Motive {
    /// Every motive, in display order.
    pub const ALL: [Motive; 4] = [
        Motive::Jealousy,
        Motive::Money,
        Motive::Revenge,
        Motive::Competition,
    ];

    /// Pick a motive uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Parse a motive from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// The lowercase name of this motive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jealousy => "jealousy",
            Self::Money => "money",
            Self::Revenge => "revenge",
            Self::Competition => "competition",
        }
    }
}

impl std::fmt::Display for Motive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a suspect carries themselves under questioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Fidgety and anxious.
    Nervous,
    /// Composed.
    Calm,
    /// Dismissive and proud.
    Arrogant,
    /// Says as little as possible.
    Silent,
}

impl Behavior {
    /// Every behavior, in display order.
    pub const ALL: [Behavior; 4] = [
        Behavior::Nervous,
        Behavior::Calm,
        Behavior::Arrogant,
        Behavior::Silent,
    ];

    /// Pick a behavior uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Parse a behavior from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// The lowercase name of this behavior.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nervous => "nervous",
            Self::Calm => "calm",
            Self::Arrogant => "arrogant",
            Self::Silent => "silent",
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character who may or may not be the murderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// Display name, unique within a game.
    pub name: String,
    /// The suspect's motive.
    pub motive: Motive,
    /// The suspect's demeanor.
    pub behavior: Behavior,
    /// Whether this suspect committed the murder.
    pub is_murderer: bool,
}

impl Suspect {
    /// Create a suspect.
    pub fn new(name: impl Into<String>, motive: Motive, behavior: Behavior, is_murderer: bool) -> Self {
        Self {
            name: name.into(),
            motive,
            behavior,
            is_murderer,
        }
    }
}

/// The suspects of one game, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    suspects: Vec<Suspect>,
    murderer: String,
}

impl Roster {
    /// Build a roster, checking that names are unique and exactly one
    /// suspect is the murderer.
    pub fn new(suspects: Vec<Suspect>) -> CaseResult<Self> {
        let mut seen = HashSet::new();
        for s in &suspects {
            if !seen.insert(s.name.as_str()) {
                return Err(CaseError::DuplicateName(s.name.clone()));
            }
        }

        let murderers: Vec<&Suspect> = suspects.iter().filter(|s| s.is_murderer).collect();
        let murderer = match murderers.as_slice() {
            [one] => one.name.clone(),
            _ => {
                return Err(CaseError::Configuration(format!(
                    "a roster needs exactly one murderer, found {}",
                    murderers.len()
                )));
            }
        };

        Ok(Self { suspects, murderer })
    }

    /// The murderer's name.
    pub fn murderer(&self) -> &str {
        &self.murderer
    }

    /// Look up a suspect by exact name.
    pub fn get(&self, name: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.name == name)
    }

    /// Look up a suspect by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&Suspect> {
        let needle = name.trim().to_lowercase();
        self.suspects.iter().find(|s| s.name.to_lowercase() == needle)
    }

    /// Whether a suspect with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all suspects in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> {
        self.suspects.iter()
    }

    /// Names in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.suspects.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of suspects.
    pub fn len(&self) -> usize {
        self.suspects.len()
    }

    /// Whether the roster has no suspects.
    pub fn is_empty(&self) -> bool {
        self.suspects.is_empty()
    }
}

/// Draw `count` distinct suspects from `pool` and pick one as the murderer.
///
/// Names are drawn uniformly without replacement. Motive and behavior are
/// independent uniform draws, so repeats across suspects are expected.
pub fn generate_suspects<S, R>(pool: &[S], count: usize, rng: &mut R) -> CaseResult<Roster>
where
    S: AsRef<str>,
    R: Rng,
{
    if pool.len() < count {
        return Err(CaseError::InsufficientCandidates {
            required: count,
            available: pool.len(),
        });
    }
    if count == 0 {
        return Err(CaseError::InsufficientSuspects { innocents: 0 });
    }

    let mut seen = HashSet::new();
    for name in pool {
        if !seen.insert(name.as_ref()) {
            return Err(CaseError::DuplicateName(name.as_ref().to_string()));
        }
    }

    let mut selected: Vec<&str> = pool.iter().map(|n| n.as_ref()).collect();
    selected.shuffle(rng);
    selected.truncate(count);

    let murderer_idx = rng.random_range(0..count);
    let suspects = selected
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Suspect::new(
                *name,
                Motive::random(rng),
                Behavior::random(rng),
                i == murderer_idx,
            )
        })
        .collect();

    let roster = Roster::new(suspects)?;
    tracing::debug!(suspects = roster.len(), "generated suspect roster");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::CANDIDATE_NAMES;

    #[test]
    fn exactly_one_murderer() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let roster = generate_suspects(&CANDIDATE_NAMES, 4, &mut rng).unwrap();
            assert_eq!(roster.len(), 4);
            assert_eq!(roster.iter().filter(|s| s.is_murderer).count(), 1);
            assert!(roster.get(roster.murderer()).unwrap().is_murderer);
        }
    }

    #[test]
    fn names_are_distinct_and_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let roster = generate_suspects(&CANDIDATE_NAMES, 4, &mut rng).unwrap();
        let names: HashSet<&str> = roster.names().into_iter().collect();
        assert_eq!(names.len(), 4);
        assert!(names.iter().all(|n| CANDIDATE_NAMES.contains(n)));
    }

    #[test]
    fn full_pool_selects_everyone() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = ["A", "B", "C", "D"];
        let roster = generate_suspects(&pool, 4, &mut rng).unwrap();
        let mut names = roster.names();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert!(pool.contains(&roster.murderer()));
    }

    #[test]
    fn pool_too_small() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_suspects(&["A", "B", "C"], 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            CaseError::InsufficientCandidates {
                required: 4,
                available: 3
            }
        );
    }

    #[test]
    fn zero_suspects_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_suspects(&["A"], 0, &mut rng).unwrap_err();
        assert!(matches!(err, CaseError::InsufficientSuspects { .. }));
    }

    #[test]
    fn duplicate_pool_names_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_suspects(&["A", "B", "A"], 2, &mut rng).unwrap_err();
        assert_eq!(err, CaseError::DuplicateName("A".into()));
    }

    #[test]
    fn every_name_can_be_the_murderer() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = ["A", "B", "C", "D"];
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let roster = generate_suspects(&pool, 4, &mut rng).unwrap();
            seen.insert(roster.murderer().to_string());
        }
        assert_eq!(seen.len(), 4, "murderers seen: {seen:?}");
    }

    #[test]
    fn all_motives_and_behaviors_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut motives = HashSet::new();
        let mut behaviors = HashSet::new();
        for _ in 0..200 {
            let roster = generate_suspects(&CANDIDATE_NAMES, 4, &mut rng).unwrap();
            for s in roster.iter() {
                motives.insert(s.motive);
                behaviors.insert(s.behavior);
            }
        }
        assert_eq!(motives.len(), 4);
        assert_eq!(behaviors.len(), 4);
    }

    #[test]
    fn roster_requires_one_murderer() {
        let none = vec![
            Suspect::new("A", Motive::Money, Behavior::Calm, false),
            Suspect::new("B", Motive::Money, Behavior::Calm, false),
        ];
        assert!(matches!(Roster::new(none), Err(CaseError::Configuration(_))));

        let two = vec![
            Suspect::new("A", Motive::Money, Behavior::Calm, true),
            Suspect::new("B", Motive::Money, Behavior::Calm, true),
        ];
        assert!(matches!(Roster::new(two), Err(CaseError::Configuration(_))));
    }

    #[test]
    fn roster_find_ignores_case() {
        let roster = Roster::new(vec![
            Suspect::new("Dr.Z", Motive::Revenge, Behavior::Silent, true),
            Suspect::new("Aria", Motive::Money, Behavior::Calm, false),
        ])
        .unwrap();
        assert_eq!(roster.find("  dr.z ").unwrap().name, "Dr.Z");
        assert_eq!(roster.find("ARIA").unwrap().name, "Aria");
        assert!(roster.find("bobby").is_none());
        assert!(roster.get("aria").is_none());
    }

    #[test]
    fn motive_and_behavior_display_and_parse() {
        assert_eq!(Motive::Competition.to_string(), "competition");
        assert_eq!(Behavior::Arrogant.to_string(), "arrogant");
        assert_eq!(Motive::parse("Money"), Some(Motive::Money));
        assert_eq!(Behavior::parse(" SILENT"), Some(Behavior::Silent));
        assert_eq!(Motive::parse("greed"), None);
    }

    #[test]
    fn motive_serde_uses_lowercase() {
        let json = serde_json::to_string(&Motive::Jealousy).unwrap();
        assert_eq!(json, "\"jealousy\"");
        let b: Behavior = serde_json::from_str("\"nervous\"").unwrap();
        assert_eq!(b, Behavior::Nervous);
    }
}
