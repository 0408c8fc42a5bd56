use serde::{Deserialize, Serialize};

/// A match that passed the validity rules, annotated with the derived
/// `won` flag. Lives only for the duration of one rating computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedMatch {
    pub match_id: i64,
    pub won: bool,
    pub duration: u32,
    pub hero_id: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub start_time: i64,
    pub average_rank: Option<u32>
}

impl ValidatedMatch {
    /// (kills + assists) / deaths, with deaths coerced to at least 1
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }
}
