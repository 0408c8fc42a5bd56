use crate::model::structures::raw_match::RawMatch;
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const HERO_POOL: &[u32] = &[1, 5, 8, 14, 26, 44, 74, 86, 99, 114];

/// Generates one plausible raw match with the given outcome. Slot, hero
/// and scoreline come from the supplied RNG so histories are reproducible
/// per seed.
pub fn generate_raw_match(
    rng: &mut ChaCha8Rng,
    match_id: i64,
    won: bool,
    average_rank: Option<u32>,
    start_time: DateTime<Utc>
) -> RawMatch {
    let radiant = rng.random_bool(0.5);
    let player_slot = if radiant {
        rng.random_range(0..5)
    } else {
        128 + rng.random_range(0..5)
    };

    // The recorded winner is whichever team makes `won` come out right
    let radiant_win = won == radiant;

    let kills = rng.random_range(0..20);
    let deaths = rng.random_range(0..15);
    let assists = rng.random_range(0..30);

    RawMatch {
        match_id,
        player_slot,
        radiant_win,
        duration: rng.random_range(900..3600),
        hero_id: HERO_POOL[rng.random_range(0..HERO_POOL.len())],
        kills,
        deaths,
        assists,
        start_time: start_time.timestamp(),
        average_rank,
        leaver_status: Some(0),
        party_size: None
    }
}

/// Generates a history of `games` valid matches with exactly `wins` wins,
/// spaced six hours apart going back from `newest`. Deterministic for a
/// given seed.
pub fn generate_history(
    seed: u64,
    games: u32,
    wins: u32,
    average_rank: Option<u32>,
    newest: DateTime<Utc>
) -> Vec<RawMatch> {
    if wins > games {
        panic!("wins must not exceed games");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut matches = Vec::with_capacity(games as usize);

    for i in 0..games {
        let start_time = newest - Duration::hours(6 * i as i64);
        matches.push(generate_raw_match(
            &mut rng,
            i as i64 + 1,
            i < wins,
            average_rank,
            start_time
        ));
    }

    matches
}
