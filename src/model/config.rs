use crate::model::constants;
use serde::{Deserialize, Serialize};
use std::env;

/// Every tunable of the rating formula, as named configuration.
/// The defaults are one self-consistent revision; individual values can be
/// overridden through `TMMR_*` environment variables without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaConfig {
    /// Rating assigned to a neutral/unknown player
    pub base_rating: f64,
    /// Lower clamp bound of the final rating
    pub rating_floor: i32,
    /// Upper clamp bound of the final rating
    pub rating_ceiling: i32,
    /// Wilson interval z parameter (1.96 = 95% confidence)
    pub wilson_z: f64,
    /// Opponent-rank clamp bounds, applied before weighting
    pub rank_floor: u32,
    pub rank_ceiling: u32,
    /// Ordinal rank considered a neutral field of opponents
    pub rank_neutral: f64,
    /// Growth base of the per-win difficulty multiplier
    pub rank_growth_base: f64,
    /// Rating points per unit of (win rate - 0.5)
    pub win_rate_scale: f64,
    /// Rating points per unit of (role-adjusted KDA - 1.0)
    pub kda_scale: f64,
    /// Rating points per ordinal rank above/below neutral
    pub rank_scale: f64,
    /// Half-life of the per-match recency weight, in days
    pub recency_half_life_days: f64,
    /// Validated game count at which the maturity penalty reaches zero
    pub maturity_threshold: u32,
    /// Penalty at zero validated games, in rating points
    pub maturity_max_penalty: f64,
    /// Minimum validated game count for a non-provisional rating
    pub calibration_floor: u32,
    /// Matches shorter than this are discarded as aborted/remade
    pub min_duration_seconds: u32,
    /// Leaver statuses above this discard the match
    pub max_valid_leaver_status: i32
}

impl FormulaConfig {
    /// Builds a config from `TMMR_*` environment variables, falling back to
    /// the compiled defaults per field.
    pub fn from_env() -> Self {
        let defaults = FormulaConfig::default();

        FormulaConfig {
            base_rating: env_or("TMMR_BASE_RATING", defaults.base_rating),
            rating_floor: env_or("TMMR_RATING_FLOOR", defaults.rating_floor),
            rating_ceiling: env_or("TMMR_RATING_CEILING", defaults.rating_ceiling),
            wilson_z: env_or("TMMR_WILSON_Z", defaults.wilson_z),
            rank_floor: env_or("TMMR_RANK_FLOOR", defaults.rank_floor),
            rank_ceiling: env_or("TMMR_RANK_CEILING", defaults.rank_ceiling),
            rank_neutral: env_or("TMMR_RANK_NEUTRAL", defaults.rank_neutral),
            rank_growth_base: env_or("TMMR_RANK_GROWTH_BASE", defaults.rank_growth_base),
            win_rate_scale: env_or("TMMR_WIN_RATE_SCALE", defaults.win_rate_scale),
            kda_scale: env_or("TMMR_KDA_SCALE", defaults.kda_scale),
            rank_scale: env_or("TMMR_RANK_SCALE", defaults.rank_scale),
            recency_half_life_days: env_or("TMMR_RECENCY_HALF_LIFE_DAYS", defaults.recency_half_life_days),
            maturity_threshold: env_or("TMMR_MATURITY_THRESHOLD", defaults.maturity_threshold),
            maturity_max_penalty: env_or("TMMR_MATURITY_MAX_PENALTY", defaults.maturity_max_penalty),
            calibration_floor: env_or("TMMR_CALIBRATION_FLOOR", defaults.calibration_floor),
            min_duration_seconds: env_or("TMMR_MIN_DURATION_SECONDS", defaults.min_duration_seconds),
            max_valid_leaver_status: env_or("TMMR_MAX_VALID_LEAVER_STATUS", defaults.max_valid_leaver_status)
        }
    }
}

impl Default for FormulaConfig {
    fn default() -> Self {
        FormulaConfig {
            base_rating: constants::BASE_RATING,
            rating_floor: constants::RATING_FLOOR,
            rating_ceiling: constants::RATING_CEILING,
            wilson_z: constants::WILSON_Z,
            rank_floor: constants::RANK_FLOOR,
            rank_ceiling: constants::RANK_CEILING,
            rank_neutral: constants::RANK_NEUTRAL,
            rank_growth_base: constants::RANK_GROWTH_BASE,
            win_rate_scale: constants::WIN_RATE_SCALE,
            kda_scale: constants::KDA_SCALE,
            rank_scale: constants::RANK_SCALE,
            recency_half_life_days: constants::RECENCY_HALF_LIFE_DAYS,
            maturity_threshold: constants::MATURITY_THRESHOLD,
            maturity_max_penalty: constants::MATURITY_MAX_PENALTY,
            calibration_floor: constants::CALIBRATION_FLOOR,
            min_duration_seconds: constants::MIN_DURATION_SECONDS,
            max_valid_leaver_status: constants::MAX_VALID_LEAVER_STATUS
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(v) => v.parse().unwrap_or(default),
        Err(_) => default
    }
}
