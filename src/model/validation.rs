use crate::model::{
    config::FormulaConfig,
    structures::{raw_match::RawMatch, validated_match::ValidatedMatch}
};

/// Result of running the validity rules over a submitted match list.
/// The discard counters are diagnostics only; nothing downstream branches
/// on them.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub validated: Vec<ValidatedMatch>,
    pub submitted: u32,
    pub discarded_short: u32,
    pub discarded_leaver: u32
}

/// Filters raw matches into the canonical validated form. Matches shorter
/// than the duration floor are aborted/remade games; a leaver status above
/// the valid maximum means the player left early. An absent leaver status
/// counts as valid. Never fails.
pub fn validate_matches(matches: &[RawMatch], config: &FormulaConfig) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        submitted: matches.len() as u32,
        ..Default::default()
    };

    for m in matches {
        if m.duration < config.min_duration_seconds {
            outcome.discarded_short += 1;
            continue;
        }

        if let Some(status) = m.leaver_status {
            if status > config.max_valid_leaver_status {
                outcome.discarded_leaver += 1;
                continue;
            }
        }

        outcome.validated.push(ValidatedMatch {
            match_id: m.match_id,
            won: m.won(),
            duration: m.duration,
            hero_id: m.hero_id,
            kills: m.kills,
            deaths: m.deaths,
            assists: m.assists,
            start_time: m.start_time,
            average_rank: m.average_rank
        });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_match(duration: u32, leaver_status: Option<i32>) -> RawMatch {
        RawMatch {
            match_id: 1,
            player_slot: 130,
            radiant_win: false,
            duration,
            hero_id: 8,
            kills: 7,
            deaths: 2,
            assists: 9,
            start_time: 1_700_000_000,
            average_rank: Some(52),
            leaver_status,
            party_size: None
        }
    }

    #[test]
    fn test_short_match_discarded() {
        let outcome = validate_matches(&[raw_match(479, None)], &FormulaConfig::default());

        assert!(outcome.validated.is_empty());
        assert_eq!(outcome.submitted, 1);
        assert_eq!(outcome.discarded_short, 1);
        assert_eq!(outcome.discarded_leaver, 0);
    }

    #[test]
    fn test_duration_floor_is_inclusive() {
        let outcome = validate_matches(&[raw_match(480, None)], &FormulaConfig::default());

        assert_eq!(outcome.validated.len(), 1);
    }

    #[test]
    fn test_leaver_discarded() {
        let outcome = validate_matches(&[raw_match(1800, Some(2))], &FormulaConfig::default());

        assert!(outcome.validated.is_empty());
        assert_eq!(outcome.discarded_leaver, 1);
    }

    #[test]
    fn test_leaver_status_one_and_absent_are_valid() {
        let matches = [raw_match(1800, Some(1)), raw_match(1800, Some(0)), raw_match(1800, None)];
        let outcome = validate_matches(&matches, &FormulaConfig::default());

        assert_eq!(outcome.validated.len(), 3);
    }

    #[test]
    fn test_won_derived_from_side_and_winner() {
        // Dire slot, radiant lost: the player won
        let outcome = validate_matches(&[raw_match(1800, None)], &FormulaConfig::default());

        assert!(outcome.validated[0].won);
    }

    #[test]
    fn test_empty_input() {
        let outcome = validate_matches(&[], &FormulaConfig::default());

        assert!(outcome.validated.is_empty());
        assert_eq!(outcome.submitted, 0);
    }
}
