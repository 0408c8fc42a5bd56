use crate::model::{tiers::TierLabel, FormulaVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one rating computation produced for one player, including
/// the intermediate values the leaderboard layer displays. Created fresh
/// on every computation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBreakdown {
    pub formula_version: FormulaVersion,
    /// True below the calibration floor; the rating is the neutral base
    pub provisional: bool,
    pub rating: i32,
    pub tier: TierLabel,
    /// Matches submitted before validation
    pub submitted_matches: u32,
    /// Matches that survived validation
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub raw_win_rate: f64,
    /// Wilson lower bound on the unweighted win rate
    pub adjusted_win_rate: f64,
    /// Sum of per-win difficulty multipliers
    pub weighted_wins: f64,
    /// Wilson lower bound on weighted_wins / (weighted_wins + losses)
    pub weighted_win_rate: f64,
    pub average_opponent_rank: f64,
    /// Mean of per-match KDA relative to the role baseline
    pub role_adjusted_kda: f64,
    /// Mean recency weight across validated matches, in (0, 1]
    pub recency_factor: f64,
    /// weighted_wins / wins; 1.0 with no wins
    pub difficulty_factor: f64,
    pub maturity_penalty: f64,
    pub computed_at: DateTime<Utc>
}
