//! Testimonies and the alibis they state.

use serde::{Deserialize, Serialize};

/// A time and place a suspect claims to have been.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alibi {
    /// Time slot, e.g. `8:00pm`.
    pub time: String,
    /// Location, e.g. `hallway`.
    pub location: String,
}

impl Alibi {
    /// Create an alibi.
    pub fn new(time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Alibi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.location, self.time)
    }
}

/// A statement a suspect gives when questioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimony {
    /// Who said it.
    pub speaker: String,
    /// The sentence as spoken.
    pub text: String,
    /// How trustworthy the statement appears, 0-100.
    pub reliability: u8,
    /// True iff the murderer said it.
    pub is_misleading: bool,
}

impl Testimony {
    /// An innocent's statement naming a partner at the given alibi.
    pub fn with_partner(speaker: &str, partner: &str, alibi: &Alibi, reliability: u8) -> Self {
        Self {
            speaker: speaker.to_string(),
            text: format!(
                "I was with {partner} in the {} at {}.",
                alibi.location, alibi.time
            ),
            reliability,
            is_misleading: false,
        }
    }

    /// The murderer's statement: a place and time, nobody to vouch for it.
    pub fn alone(speaker: &str, alibi: &Alibi, reliability: u8) -> Self {
        Self {
            speaker: speaker.to_string(),
            text: format!("I was in the {} at {}.", alibi.location, alibi.time),
            reliability,
            is_misleading: true,
        }
    }

    /// Extract the stated time and location from the text.
    ///
    /// Works on both phrasings: `... in the <location> at <time>.`
    pub fn alibi(&self) -> Option<Alibi> {
        let body = self.text.trim().trim_end_matches('.');
        let (head, time) = body.rsplit_once(" at ")?;
        let (_, location) = head.rsplit_once(" in the ")?;
        let (time, location) = (time.trim(), location.trim());
        if time.is_empty() || location.is_empty() {
            return None;
        }
        Some(Alibi::new(time, location))
    }

    /// The partner named in the text, if any.
    pub fn partner(&self) -> Option<&str> {
        let rest = self.text.strip_prefix("I was with ")?;
        let (partner, _) = rest.rsplit_once(" in the ")?;
        Some(partner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innocent_text_format() {
        let t = Testimony::with_partner("Aria", "Bobby", &Alibi::new("8:00pm", "café"), 90);
        assert_eq!(t.text, "I was with Bobby in the café at 8:00pm.");
        assert!(!t.is_misleading);
    }

    #[test]
    fn murderer_text_format() {
        let t = Testimony::alone("Dr.Z", &Alibi::new("9:00pm", "hallway"), 10);
        assert_eq!(t.text, "I was in the hallway at 9:00pm.");
        assert!(t.is_misleading);
        assert_eq!(t.partner(), None);
    }

    #[test]
    fn alibi_parsed_from_both_phrasings() {
        let t = Testimony::with_partner("Aria", "Dr.Z", &Alibi::new("7:00pm", "café"), 95);
        assert_eq!(t.alibi(), Some(Alibi::new("7:00pm", "café")));
        assert_eq!(t.partner(), Some("Dr.Z"));

        let t = Testimony::alone("Bobby", &Alibi::new("9:00pm", "hallway"), 40);
        assert_eq!(t.alibi(), Some(Alibi::new("9:00pm", "hallway")));
    }

    #[test]
    fn alibi_missing_from_free_text() {
        let t = Testimony {
            speaker: "Aria".into(),
            text: "I don't remember.".into(),
            reliability: 50,
            is_misleading: false,
        };
        assert_eq!(t.alibi(), None);
        assert_eq!(t.partner(), None);
    }

    #[test]
    fn alibi_display() {
        assert_eq!(Alibi::new("8:00pm", "hallway").to_string(), "hallway at 8:00pm");
    }
}
