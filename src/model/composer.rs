use crate::model::{
    config::FormulaConfig,
    constants::SECONDS_PER_DAY,
    heroes,
    structures::{rating_breakdown::RatingBreakdown, raw_match::RawMatch, validated_match::ValidatedMatch},
    tiers,
    validation::validate_matches,
    weighting::{difficulty_multiplier, maturity_penalty, recency_weight},
    win_rate::wilson_lower_bound,
    FormulaVersion, RatingFormula
};
use chrono::{DateTime, Utc};

/// The "weighted wins" formula revision. Wins are scaled by opponent
/// strength, the win rate is a Wilson lower bound over the weighted total,
/// and KDA is normalized against the role baseline before contributing.
pub struct WeightedWinFormula {
    config: FormulaConfig
}

/// Intermediate per-player aggregates, computed in one pass over the
/// validated matches.
#[derive(Debug, Clone)]
struct MatchAggregates {
    games: u32,
    wins: u32,
    losses: u32,
    raw_win_rate: f64,
    adjusted_win_rate: f64,
    weighted_wins: f64,
    weighted_win_rate: f64,
    average_opponent_rank: f64,
    role_adjusted_kda: f64,
    recency_factor: f64,
    difficulty_factor: f64
}

impl WeightedWinFormula {
    pub fn new(config: FormulaConfig) -> Self {
        WeightedWinFormula { config }
    }

    pub fn config(&self) -> &FormulaConfig {
        &self.config
    }

    fn aggregate(&self, validated: &[ValidatedMatch], as_of: DateTime<Utc>) -> MatchAggregates {
        let config = &self.config;
        let games = validated.len() as u32;

        let mut wins = 0u32;
        let mut weighted_wins = 0.0;
        let mut kda_ratio_sum = 0.0;
        let mut recency_sum = 0.0;
        let mut rank_sum = 0.0;
        let mut ranked_matches = 0u32;

        for m in validated {
            let rank = m.average_rank.unwrap_or(config.rank_neutral as u32);

            if m.won {
                wins += 1;
                weighted_wins += difficulty_multiplier(rank, config);
            }

            if let Some(r) = m.average_rank {
                rank_sum += r as f64;
                ranked_matches += 1;
            }

            kda_ratio_sum += m.kda() / heroes::expected_kda(m.hero_id);

            let age_days = (as_of.timestamp() - m.start_time) as f64 / SECONDS_PER_DAY;
            recency_sum += recency_weight(age_days, config.recency_half_life_days);
        }

        let losses = games - wins;

        MatchAggregates {
            games,
            wins,
            losses,
            raw_win_rate: if games > 0 { wins as f64 / games as f64 } else { 0.0 },
            adjusted_win_rate: wilson_lower_bound(wins as f64, games as f64, config.wilson_z),
            weighted_wins,
            weighted_win_rate: wilson_lower_bound(
                weighted_wins,
                weighted_wins + losses as f64,
                config.wilson_z
            ),
            average_opponent_rank: if ranked_matches > 0 {
                rank_sum / ranked_matches as f64
            } else {
                config.rank_neutral
            },
            role_adjusted_kda: if games > 0 { kda_ratio_sum / games as f64 } else { 1.0 },
            recency_factor: if games > 0 { recency_sum / games as f64 } else { 1.0 },
            difficulty_factor: if wins > 0 { weighted_wins / wins as f64 } else { 1.0 }
        }
    }

    fn compose(&self, aggregates: &MatchAggregates, penalty: f64) -> i32 {
        let config = &self.config;

        let perf = (aggregates.weighted_win_rate - 0.5) * config.win_rate_scale;
        let kda_term = (aggregates.role_adjusted_kda - 1.0) * config.kda_scale;
        let clamped_rank = aggregates
            .average_opponent_rank
            .clamp(config.rank_floor as f64, config.rank_ceiling as f64);
        let rank_term = (clamped_rank - config.rank_neutral) * config.rank_scale;

        let raw = config.base_rating + (perf + kda_term + rank_term) * aggregates.recency_factor - penalty;

        raw.clamp(config.rating_floor as f64, config.rating_ceiling as f64)
            .round() as i32
    }
}

impl RatingFormula for WeightedWinFormula {
    fn version(&self) -> FormulaVersion {
        FormulaVersion::WeightedWins
    }

    fn rate(&self, matches: &[RawMatch], as_of: DateTime<Utc>) -> RatingBreakdown {
        let config = &self.config;
        let outcome = validate_matches(matches, config);
        let aggregates = self.aggregate(&outcome.validated, as_of);

        debug_assert!(aggregates.wins + aggregates.losses == aggregates.games);

        let penalty = maturity_penalty(aggregates.games, config);
        let provisional = aggregates.games < config.calibration_floor;

        // Below the calibration floor the estimate is not trusted at all:
        // report the neutral base rather than a penalized guess.
        let rating = if provisional {
            config
                .base_rating
                .clamp(config.rating_floor as f64, config.rating_ceiling as f64)
                .round() as i32
        } else {
            self.compose(&aggregates, penalty)
        };

        RatingBreakdown {
            formula_version: self.version(),
            provisional,
            rating,
            tier: tiers::classify(rating),
            submitted_matches: outcome.submitted,
            games: aggregates.games,
            wins: aggregates.wins,
            losses: aggregates.losses,
            raw_win_rate: aggregates.raw_win_rate,
            adjusted_win_rate: aggregates.adjusted_win_rate,
            weighted_wins: aggregates.weighted_wins,
            weighted_win_rate: aggregates.weighted_win_rate,
            average_opponent_rank: aggregates.average_opponent_rank,
            role_adjusted_kda: aggregates.role_adjusted_kda,
            recency_factor: aggregates.recency_factor,
            difficulty_factor: aggregates.difficulty_factor,
            maturity_penalty: penalty,
            computed_at: as_of
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tiers::Tier;
    use approx::assert_abs_diff_eq;

    fn formula() -> WeightedWinFormula {
        WeightedWinFormula::new(FormulaConfig::default())
    }

    fn as_of() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    fn raw_match(match_id: i64, won: bool, rank: u32, start_time: i64) -> RawMatch {
        RawMatch {
            match_id,
            // Radiant slot; won is expressed through radiant_win
            player_slot: 1,
            radiant_win: won,
            duration: 2100,
            hero_id: 14, // Pudge, soft support baseline
            kills: 4,
            deaths: 4,
            assists: 4,
            start_time,
            average_rank: Some(rank),
            leaver_status: Some(0),
            party_size: None
        }
    }

    fn history(games: u32, wins: u32, rank: u32) -> Vec<RawMatch> {
        let start = as_of().timestamp() - 3600;
        (0..games)
            .map(|i| raw_match(i as i64, i < wins, rank, start - i as i64 * 60))
            .collect()
    }

    #[test]
    fn test_empty_history_is_provisional_base() {
        let breakdown = formula().rate(&[], as_of());

        assert!(breakdown.provisional);
        assert_eq!(breakdown.rating, 3500);
        assert_eq!(breakdown.games, 0);
        assert_eq!(breakdown.submitted_matches, 0);
        assert_abs_diff_eq!(breakdown.adjusted_win_rate, 0.5);
        assert_abs_diff_eq!(breakdown.recency_factor, 1.0);
    }

    #[test]
    fn test_below_calibration_floor_short_circuits() {
        // 29 stomps would be a huge rating; the gate ignores them
        let breakdown = formula().rate(&history(29, 29, 80), as_of());

        assert!(breakdown.provisional);
        assert_eq!(breakdown.rating, 3500);
        assert_eq!(breakdown.wins, 29);
    }

    #[test]
    fn test_at_calibration_floor_rating_is_confident() {
        let breakdown = formula().rate(&history(30, 15, 50), as_of());

        assert!(!breakdown.provisional);
        assert!(breakdown.rating != 3500 || breakdown.maturity_penalty > 0.0);
    }

    #[test]
    fn test_wins_plus_losses_equals_games() {
        let breakdown = formula().rate(&history(87, 41, 50), as_of());

        assert_eq!(breakdown.wins + breakdown.losses, breakdown.games);
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let matches = history(120, 70, 55);
        let first = formula().rate(&matches, as_of());
        let second = formula().rate(&matches, as_of());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_wins_against_stronger_field_worth_more() {
        let vs_strong = formula().rate(&history(200, 100, 70), as_of());
        let vs_neutral = formula().rate(&history(200, 100, 50), as_of());

        assert!(vs_strong.weighted_wins > vs_neutral.weighted_wins);
        assert!(vs_strong.rating > vs_neutral.rating);
    }

    #[test]
    fn test_losses_are_not_weighted() {
        // All losses: opponent strength must not change the weighted total
        let lost_to_weak = formula().rate(&history(50, 0, 20), as_of());
        let lost_to_strong = formula().rate(&history(50, 0, 80), as_of());

        assert_abs_diff_eq!(lost_to_weak.weighted_wins, 0.0);
        assert_abs_diff_eq!(lost_to_strong.weighted_wins, 0.0);
        assert_abs_diff_eq!(lost_to_weak.weighted_win_rate, lost_to_strong.weighted_win_rate);
    }

    #[test]
    fn test_maturity_penalty_separates_identical_win_rates() {
        let mature = formula().rate(&history(200, 100, 50), as_of());
        let immature = formula().rate(&history(100, 50, 50), as_of());

        assert_abs_diff_eq!(mature.maturity_penalty, 0.0);
        assert!(immature.maturity_penalty > 0.0);
        assert!(immature.rating < mature.rating);
    }

    #[test]
    fn test_rating_clamped_to_ceiling() {
        let config = FormulaConfig {
            // A generous base pushes any positive history past the ceiling
            base_rating: 9400.0,
            ..FormulaConfig::default()
        };
        let formula = WeightedWinFormula::new(config);
        let breakdown = formula.rate(&history(250, 200, 80), as_of());

        assert_eq!(breakdown.rating, 9500);
        assert_eq!(breakdown.tier.tier, Tier::Immortal);
    }

    #[test]
    fn test_rating_clamped_to_floor() {
        let config = FormulaConfig {
            base_rating: 600.0,
            ..FormulaConfig::default()
        };
        let formula = WeightedWinFormula::new(config);
        let breakdown = formula.rate(&history(250, 10, 15), as_of());

        assert_eq!(breakdown.rating, 500);
        assert_eq!(breakdown.tier.tier, Tier::Herald);
    }

    #[test]
    fn test_stale_history_contributes_less() {
        let years_ago = as_of().timestamp() - 3 * 365 * 86_400;
        let old: Vec<RawMatch> = (0..200)
            .map(|i| raw_match(i, i < 150, 50, years_ago - i * 60))
            .collect();

        let fresh_breakdown = formula().rate(&history(200, 150, 50), as_of());
        let stale_breakdown = formula().rate(&old, as_of());

        assert!(stale_breakdown.recency_factor < 0.02);
        // Same record, but the stale one sits closer to base
        let base = 3500.0;
        assert!((stale_breakdown.rating as f64 - base).abs() < (fresh_breakdown.rating as f64 - base).abs());
    }

    #[test]
    fn test_invalid_matches_excluded_from_aggregates() {
        let mut matches = history(60, 30, 50);
        matches.push(RawMatch {
            duration: 120,
            ..matches[0].clone()
        });
        matches.push(RawMatch {
            leaver_status: Some(4),
            ..matches[0].clone()
        });

        let breakdown = formula().rate(&matches, as_of());

        assert_eq!(breakdown.submitted_matches, 62);
        assert_eq!(breakdown.games, 60);
    }
}
