use crate::model::config::FormulaConfig;

/// Per-win multiplier for the strength of the opposing field:
/// `base^(rank - neutral)` on the clamped ordinal rank scale. Exactly 1.0
/// at the neutral rank; a win against stronger opponents counts as more
/// than one win, against weaker opponents as less. Applied to wins only.
pub fn difficulty_multiplier(rank: u32, config: &FormulaConfig) -> f64 {
    let clamped = rank.clamp(config.rank_floor, config.rank_ceiling) as f64;

    config.rank_growth_base.powf(clamped - config.rank_neutral)
}

/// Exponential half-life decay of a match's contribution with age.
/// Future timestamps (negative age) weigh 1.0.
pub fn recency_weight(age_days: f64, half_life_days: f64) -> f64 {
    0.5f64.powf(age_days.max(0.0) / half_life_days)
}

/// Linear penalty for small validated samples, in rating points. Reaches
/// exactly zero at the maturity threshold and stays there.
pub fn maturity_penalty(games: u32, config: &FormulaConfig) -> f64 {
    if games >= config.maturity_threshold {
        return 0.0;
    }

    (config.maturity_threshold - games) as f64 / config.maturity_threshold as f64 * config.maturity_max_penalty
}
