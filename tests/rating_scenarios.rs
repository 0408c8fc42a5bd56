use chrono::{DateTime, Duration, Utc};
use tmmr_processor::{
    model::{
        config::FormulaConfig,
        create_formula,
        structures::raw_match::RawMatch,
        tiers::{classify, Tier},
        FormulaVersion, RatingFormula
    },
    processor::{batch::compute_breakdowns, snapshot::PlayerHistory},
    utils::test_utils::generate_history
};

mod common;

fn as_of() -> DateTime<Utc> {
    "2025-06-01T00:00:00Z".parse().unwrap()
}

fn formula() -> Box<dyn RatingFormula + Send + Sync> {
    create_formula(FormulaVersion::WeightedWins, FormulaConfig::default())
}

/// A fully neutral match: role-baseline KDA (Pudge at 4/4/4 is exactly the
/// soft-support expected 2.0) against a neutral-rank field.
fn neutral_match(match_id: i64, won: bool, start_time: DateTime<Utc>) -> RawMatch {
    RawMatch {
        match_id,
        player_slot: 1,
        radiant_win: won,
        duration: 2400,
        hero_id: 14,
        kills: 4,
        deaths: 4,
        assists: 4,
        start_time: start_time.timestamp(),
        average_rank: Some(50),
        leaver_status: Some(0),
        party_size: None
    }
}

fn neutral_history(games: u32, wins: u32) -> Vec<RawMatch> {
    (0..games)
        .map(|i| neutral_match(i as i64 + 1, i < wins, as_of() - Duration::hours(i as i64)))
        .collect()
}

#[test]
fn scenario_zero_matches_yields_provisional_base() {
    common::init_test_env();

    let breakdown = formula().rate(&[], as_of());

    assert!(breakdown.provisional);
    assert_eq!(breakdown.rating, 3500);
    assert_eq!(breakdown.games, 0);
    assert_eq!(breakdown.wins + breakdown.losses, 0);
}

#[test]
fn scenario_neutral_veteran_sits_near_base() {
    common::init_test_env();

    // 300 games, 150 wins, all against a neutral field, all fresh
    let breakdown = formula().rate(&neutral_history(300, 150), as_of());

    assert!(!breakdown.provisional);
    assert_eq!(breakdown.games, 300);
    assert_eq!(breakdown.maturity_penalty, 0.0);
    assert!(breakdown.recency_factor > 0.99);
    // The Wilson bound pulls the weighted win rate slightly under 0.5
    assert!((breakdown.weighted_win_rate - 0.5).abs() < 0.06);
    assert!((breakdown.rating - 3500).abs() <= 200, "rating was {}", breakdown.rating);
}

#[test]
fn scenario_fewer_games_scores_strictly_lower() {
    common::init_test_env();

    // Identical 50% record; one player at the maturity threshold, one at half
    let mature = formula().rate(&neutral_history(200, 100), as_of());
    let immature = formula().rate(&neutral_history(100, 50), as_of());

    assert_eq!(mature.maturity_penalty, 0.0);
    assert!(immature.maturity_penalty > 0.0);
    assert!(immature.rating < mature.rating);
}

#[test]
fn scenario_recomputation_is_idempotent() {
    common::init_test_env();

    let matches = generate_history(9, 250, 140, Some(60), as_of());

    let first = formula().rate(&matches, as_of());
    let second = formula().rate(&matches, as_of());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn scenario_out_of_range_ratings_hit_clamp_bounds() {
    common::init_test_env();

    let stomp_config = FormulaConfig {
        base_rating: 9000.0,
        ..FormulaConfig::default()
    };
    let stomper = create_formula(FormulaVersion::WeightedWins, stomp_config);
    let high = stomper.rate(&generate_history(2, 300, 280, Some(80), as_of()), as_of());
    assert_eq!(high.rating, 9500);
    assert_eq!(high.tier.tier, Tier::Immortal);

    let gutter_config = FormulaConfig {
        base_rating: 700.0,
        ..FormulaConfig::default()
    };
    let gutter = create_formula(FormulaVersion::WeightedWins, gutter_config);
    let low = gutter.rate(&neutral_history(250, 40), as_of());
    assert_eq!(low.rating, 500);
    assert_eq!(low.tier.tier, Tier::Herald);
}

#[test]
fn scenario_tier_follows_rating_across_population() {
    common::init_test_env();

    let histories: Vec<PlayerHistory> = (0..40)
        .map(|i| PlayerHistory {
            player_id: i,
            matches: generate_history(i as u64, 100 + i as u32, 30 + i as u32, Some(35 + i as u32), as_of())
        })
        .collect();

    let formula = formula();
    let results = compute_breakdowns(&histories, formula.as_ref(), as_of());

    let mut breakdowns: Vec<_> = results.values().collect();
    breakdowns.sort_by_key(|b| b.rating);

    for pair in breakdowns.windows(2) {
        assert!(pair[0].tier <= pair[1].tier);
    }

    // And each reported tier matches a direct classification
    for b in breakdowns {
        assert_eq!(b.tier, classify(b.rating));
    }
}

#[test]
fn scenario_calibrating_player_reports_aggregates() {
    common::init_test_env();

    let matches = generate_history(4, 12, 9, Some(55), as_of());
    let breakdown = formula().rate(&matches, as_of());

    assert!(breakdown.provisional);
    assert_eq!(breakdown.rating, 3500);
    // The gate hides the rating, not the diagnostics
    assert_eq!(breakdown.games, 12);
    assert_eq!(breakdown.wins, 9);
    assert!(breakdown.weighted_wins > 0.0);
}
