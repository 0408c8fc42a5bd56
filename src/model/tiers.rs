use crate::model::constants::{RATING_FLOOR, TIER_DIVISIONS, TIER_DIVISION_WIDTH, TIER_SPAN};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use strum_macros::EnumIter;

/// Named tiers, lowest to highest. Tiers 1-7 are subdivided into five
/// divisions; Immortal is open-ended with no divisions.
#[derive(
    Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter,
)]
#[repr(u8)]
pub enum Tier {
    Herald = 1,
    Guardian = 2,
    Crusader = 3,
    Archon = 4,
    Legend = 5,
    Ancient = 6,
    Divine = 7,
    Immortal = 8
}

impl Tier {
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Herald => "Herald",
            Tier::Guardian => "Guardian",
            Tier::Crusader => "Crusader",
            Tier::Archon => "Archon",
            Tier::Legend => "Legend",
            Tier::Ancient => "Ancient",
            Tier::Divine => "Divine",
            Tier::Immortal => "Immortal"
        }
    }
}

/// Tier plus division, e.g. "Archon 2". Division ascends 1-5 within a
/// tier; Immortal carries no division. Ordering follows rating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TierLabel {
    pub tier: Tier,
    pub division: Option<u8>
}

impl fmt::Display for TierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(division) => write!(f, "{} {}", self.tier.name(), division),
            None => write!(f, "{}", self.tier.name())
        }
    }
}

lazy_static! {
    /// Ordered `[lower_bound, label)` ranges, total over the rating domain.
    static ref TIER_THRESHOLDS: Vec<(i32, TierLabel)> = build_thresholds();
}

fn build_thresholds() -> Vec<(i32, TierLabel)> {
    use strum::IntoEnumIterator;

    let mut table = Vec::new();

    for (index, tier) in Tier::iter().enumerate() {
        let tier_lower = RATING_FLOOR + index as i32 * TIER_SPAN;

        if tier == Tier::Immortal {
            table.push((tier_lower, TierLabel { tier, division: None }));
        } else {
            for division in 0..TIER_DIVISIONS {
                table.push((
                    tier_lower + division * TIER_DIVISION_WIDTH,
                    TierLabel {
                        tier,
                        division: Some(division as u8 + 1)
                    }
                ));
            }
        }
    }

    table
}

/// Total, deterministic, monotonic step function from rating to tier
/// label. Ratings below the table floor map to the lowest label; there is
/// no rating this rejects.
pub fn classify(rating: i32) -> TierLabel {
    let idx = TIER_THRESHOLDS.partition_point(|(lower, _)| *lower <= rating);

    TIER_THRESHOLDS[idx.saturating_sub(1)].1
}
