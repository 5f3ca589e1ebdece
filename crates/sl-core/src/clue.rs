//! Clue generation.
//!
//! Innocents are paired up and all reference one shared alibi, so their
//! statements corroborate each other. The murderer gets one fabricated
//! statement per pairing round, always at a different time and place and
//! never naming anyone.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{CaseError, CaseResult};
use crate::suspect::Roster;
use crate::testimony::{Alibi, Testimony};

/// Reliability range for innocent statements.
pub const INNOCENT_RELIABILITY: std::ops::RangeInclusive<u8> = 85..=100;

/// Reliability range for the murderer's statements.
pub const MURDERER_RELIABILITY: std::ops::RangeInclusive<u8> = 0..=50;

/// Pick a partner for every innocent.
///
/// Each innocent takes the first candidate (in one shuffled order) that is
/// not themselves and whose pair has not been used yet. When every pair is
/// used, a random other innocent is picked instead, so pairings may repeat
/// or be one-sided.
pub fn assign_partners<S, R>(innocents: &[S], rng: &mut R) -> CaseResult<Vec<(String, String)>>
where
    S: AsRef<str>,
    R: Rng,
{
    let names: Vec<&str> = innocents.iter().map(|n| n.as_ref()).collect();
    let distinct: HashSet<&str> = names.iter().copied().collect();
    if distinct.len() < 2 {
        return Err(CaseError::InsufficientSuspects {
            innocents: distinct.len(),
        });
    }

    let mut order = names.clone();
    order.shuffle(rng);

    let mut used: HashSet<(&str, &str)> = HashSet::new();
    let mut pairs = Vec::with_capacity(names.len());

    for &name in &names {
        let fresh = order
            .iter()
            .copied()
            .find(|&c| c != name && !used.contains(&pair_key(name, c)));

        let partner = match fresh {
            Some(p) => p,
            None => {
                let others: Vec<&str> = names.iter().copied().filter(|&n| n != name).collect();
                let p = others
                    .choose(rng)
                    .copied()
                    .ok_or(CaseError::InsufficientSuspects {
                        innocents: distinct.len(),
                    })?;
                tracing::trace!(suspect = name, partner = p, "no unused pair left, reusing");
                p
            }
        };

        used.insert(pair_key(name, partner));
        pairs.push((name.to_string(), partner.to_string()));
    }

    Ok(pairs)
}

/// Generate the full, shuffled list of testimonies for a case.
///
/// Produces one innocent statement and one murderer statement per
/// innocent suspect. Fails before drawing anything if the tables are too
/// small to pick a differing alibi, if `murderer` is not on the roster, or
/// if fewer than two innocents remain.
pub fn generate_clues<S, R>(
    roster: &Roster,
    murderer: &str,
    time_slots: &[S],
    locations: &[S],
    rng: &mut R,
) -> CaseResult<Vec<Testimony>>
where
    S: AsRef<str>,
    R: Rng,
{
    check_table("time slots", time_slots)?;
    check_table("locations", locations)?;

    if !roster.contains(murderer) {
        return Err(CaseError::UnknownSuspect(murderer.to_string()));
    }

    let innocents: Vec<&str> = roster
        .iter()
        .map(|s| s.name.as_str())
        .filter(|&n| n != murderer)
        .collect();
    if innocents.len() < 2 {
        return Err(CaseError::InsufficientSuspects {
            innocents: innocents.len(),
        });
    }

    let shared = Alibi::new(
        pick(time_slots, None, rng)?,
        pick(locations, None, rng)?,
    );
    tracing::trace!(alibi = %shared, "drew shared alibi");

    let pairs = assign_partners(&innocents, rng)?;

    let mut clues = Vec::with_capacity(pairs.len() * 2);
    for (name, partner) in &pairs {
        let reliability = rng.random_range(INNOCENT_RELIABILITY);
        clues.push(Testimony::with_partner(name, partner, &shared, reliability));

        let false_alibi = Alibi::new(
            pick(time_slots, Some(shared.time.as_str()), rng)?,
            pick(locations, Some(shared.location.as_str()), rng)?,
        );
        let reliability = rng.random_range(MURDERER_RELIABILITY);
        clues.push(Testimony::alone(murderer, &false_alibi, reliability));
    }

    clues.shuffle(rng);
    tracing::debug!(
        testimonies = clues.len(),
        innocents = innocents.len(),
        "generated clues"
    );
    Ok(clues)
}

/// Pick one testimony spoken by `name`, uniformly among theirs.
pub fn get_testimony_for<'a, R: Rng>(
    name: &str,
    clues: &'a [Testimony],
    rng: &mut R,
) -> Option<&'a Testimony> {
    let spoken: Vec<&Testimony> = clues.iter().filter(|c| c.speaker == name).collect();
    spoken.choose(rng).copied()
}

fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

fn check_table<S: AsRef<str>>(label: &str, values: &[S]) -> CaseResult<()> {
    let distinct: HashSet<&str> = values.iter().map(|v| v.as_ref()).collect();
    if distinct.len() < 2 {
        return Err(CaseError::Configuration(format!(
            "need at least 2 distinct {label}, got {}",
            distinct.len()
        )));
    }
    Ok(())
}

fn pick<'a, S, R>(values: &'a [S], except: Option<&str>, rng: &mut R) -> CaseResult<&'a str>
where
    S: AsRef<str>,
    R: Rng,
{
    let candidates: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref())
        .filter(|&v| Some(v) != except)
        .collect();
    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| CaseError::Configuration("no value left to choose from".to_string()))
}
