//! The end-of-game reveal.

use serde::{Deserialize, Serialize};
use sl_core::Case;

/// One testimony with its truthfulness revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthEntry {
    /// Who said it.
    pub speaker: String,
    /// What they said.
    pub text: String,
    /// Apparent reliability, 0-100.
    pub reliability: u8,
    /// Whether the statement was true.
    pub truthful: bool,
}

/// Every testimony of a case, labelled, plus the murderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthLog {
    /// Testimonies in generation order.
    pub entries: Vec<TruthEntry>,
    /// The real murderer.
    pub murderer: String,
}

impl TruthLog {
    /// Reveal everything about a case.
    pub fn from_case(case: &Case) -> Self {
        let entries = case
            .testimonies()
            .iter()
            .map(|t| TruthEntry {
                speaker: t.speaker.clone(),
                text: t.text.clone(),
                reliability: t.reliability,
                truthful: !t.is_misleading,
            })
            .collect();
        Self {
            entries,
            murderer: case.murderer().to_string(),
        }
    }

    /// Number of lies told.
    pub fn lie_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.truthful).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::CaseConfig;

    #[test]
    fn labels_every_testimony() {
        let (case, _) = Case::from_config(&CaseConfig::default().with_seed(42)).unwrap();
        let truth = TruthLog::from_case(&case);
        assert_eq!(truth.entries.len(), case.testimonies().len());
        assert_eq!(truth.murderer, case.murderer());
        assert_eq!(truth.lie_count(), 3);
        for e in truth.entries.iter().filter(|e| !e.truthful) {
            assert_eq!(e.speaker, case.murderer());
        }
    }

    #[test]
    fn serializes_to_json() {
        let (case, _) = Case::from_config(&CaseConfig::default().with_seed(1)).unwrap();
        let truth = TruthLog::from_case(&case);
        let json = serde_json::to_string(&truth).unwrap();
        assert!(json.contains("\"murderer\""));
        let back: TruthLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, truth);
    }
}
