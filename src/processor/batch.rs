use crate::{
    model::{structures::rating_breakdown::RatingBreakdown, tiers::TierLabel, RatingFormula},
    processor::snapshot::PlayerHistory,
    utils::progress_utils::progress_bar
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

/// Computes a breakdown for every player in the population. Each player's
/// computation is independent, so the work fans out across threads; the
/// result map preserves the input order regardless of completion order.
pub fn compute_breakdowns(
    histories: &[PlayerHistory],
    formula: &(dyn RatingFormula + Send + Sync),
    as_of: DateTime<Utc>
) -> IndexMap<i64, RatingBreakdown> {
    let bar = progress_bar(histories.len() as u64, "Computing ratings".to_string());

    let results: Vec<(i64, RatingBreakdown)> = histories
        .par_iter()
        .map(|history| {
            let breakdown = formula.rate(&history.matches, as_of);
            bar.inc(1);
            (history.player_id, breakdown)
        })
        .collect();

    bar.finish();
    debug!(players = results.len(), "batch rating pass finished");

    results.into_iter().collect()
}

/// Counts breakdowns per tier label, ordered lowest tier first.
pub fn tier_distribution<'a>(breakdowns: impl Iterator<Item = &'a RatingBreakdown>) -> Vec<(TierLabel, usize)> {
    breakdowns
        .counts_by(|b| b.tier)
        .into_iter()
        .sorted_by_key(|(tier, _)| *tier)
        .collect()
}
