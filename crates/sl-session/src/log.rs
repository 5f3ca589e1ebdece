//! The record of alibis heard so far.

use serde::{Deserialize, Serialize};
use sl_core::Alibi;

/// Alibis extracted from the testimonies given this session, per speaker,
/// in the order they were heard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonyLog {
    entries: Vec<(String, Vec<Alibi>)>,
}

impl TestimonyLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alibi heard from `speaker`.
    pub fn record(&mut self, speaker: &str, alibi: Alibi) {
        match self.entries.iter_mut().find(|(name, _)| name == speaker) {
            Some((_, claims)) => claims.push(alibi),
            None => self.entries.push((speaker.to_string(), vec![alibi])),
        }
    }

    /// Everything `speaker` has claimed so far.
    pub fn claims(&self, speaker: &str) -> &[Alibi] {
        self.entries
            .iter()
            .find(|(name, _)| name == speaker)
            .map(|(_, claims)| claims.as_slice())
            .unwrap_or(&[])
    }

    /// The first other speaker who has claimed the same alibi.
    pub fn corroborate(&self, speaker: &str, alibi: &Alibi) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name != speaker)
            .find(|(_, claims)| claims.contains(alibi))
            .map(|(name, _)| name.as_str())
    }

    /// Iterate over speakers and their claims in the order first heard.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Alibi])> {
        self.entries
            .iter()
            .map(|(name, claims)| (name.as_str(), claims.as_slice()))
    }

    /// Number of speakers recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = TestimonyLog::new();
        log.record("Aria", Alibi::new("8:00pm", "café"));
        log.record("Aria", Alibi::new("9:00pm", "hallway"));
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.claims("Aria"),
            &[Alibi::new("8:00pm", "café"), Alibi::new("9:00pm", "hallway")]
        );
        assert!(log.claims("Bobby").is_empty());
    }

    #[test]
    fn matching_alibis_corroborate() {
        let mut log = TestimonyLog::new();
        let shared = Alibi::new("8:00pm", "café");
        log.record("Aria", shared.clone());
        log.record("Bobby", shared.clone());
        assert_eq!(log.corroborate("Bobby", &shared), Some("Aria"));
        assert_eq!(log.corroborate("Aria", &shared), Some("Bobby"));
    }

    #[test]
    fn own_claims_do_not_corroborate() {
        let mut log = TestimonyLog::new();
        let alibi = Alibi::new("7:00pm", "hallway");
        log.record("Dr.Z", alibi.clone());
        log.record("Dr.Z", alibi.clone());
        assert_eq!(log.corroborate("Dr.Z", &alibi), None);
    }

    #[test]
    fn different_time_does_not_corroborate() {
        let mut log = TestimonyLog::new();
        log.record("Aria", Alibi::new("8:00pm", "café"));
        assert_eq!(log.corroborate("Bobby", &Alibi::new("9:00pm", "café")), None);
    }

    #[test]
    fn first_speaker_heard_wins() {
        let mut log = TestimonyLog::new();
        let shared = Alibi::new("8:00pm", "café");
        log.record("Evelen", shared.clone());
        log.record("Aria", shared.clone());
        log.record("Bobby", shared.clone());
        assert_eq!(log.corroborate("Bobby", &shared), Some("Evelen"));
        let order: Vec<&str> = log.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["Evelen", "Aria", "Bobby"]);
    }
}
