//! Configuration for generating a case.

/// Times an alibi can reference.
pub const TIME_SLOTS: [&str; 3] = ["7:00pm", "8:00pm", "9:00pm"];

/// Places an alibi can reference.
pub const LOCATIONS: [&str; 2] = ["hallway", "café"];

/// Names suspects are drawn from.
pub const CANDIDATE_NAMES: [&str; 6] = ["Aria", "Bobby", "Chandler", "Dr.Z", "Evelen", "Mishelle"];

/// Number of suspects in a standard game.
pub const SUSPECT_COUNT: usize = 4;

/// Configuration for a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseConfig {
    /// Candidate names to draw suspects from.
    pub names: Vec<String>,
    /// How many suspects to draw.
    pub suspect_count: usize,
    /// Time slots alibis may use.
    pub time_slots: Vec<String>,
    /// Locations alibis may use.
    pub locations: Vec<String>,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            names: to_owned(&CANDIDATE_NAMES),
            suspect_count: SUSPECT_COUNT,
            time_slots: to_owned(&TIME_SLOTS),
            locations: to_owned(&LOCATIONS),
            seed: None,
        }
    }
}

impl CaseConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many suspects to draw.
    pub fn with_suspect_count(mut self, count: usize) -> Self {
        self.suspect_count = count;
        self
    }

    /// Replace the candidate name pool.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the time slot table.
    pub fn with_time_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.time_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the location table.
    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
