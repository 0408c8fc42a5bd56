// Default formula constants. Every value is owned by a `FormulaConfig`
// field; only the tier table reads these directly.
pub const BASE_RATING: f64 = 3500.0;
pub const RATING_FLOOR: i32 = 500;
pub const RATING_CEILING: i32 = 9500;
pub const WILSON_Z: f64 = 1.96;
pub const RANK_FLOOR: u32 = 10;
pub const RANK_CEILING: u32 = 85;
pub const RANK_NEUTRAL: f64 = 50.0;
pub const RANK_GROWTH_BASE: f64 = 1.02;
pub const WIN_RATE_SCALE: f64 = 2500.0;
pub const KDA_SCALE: f64 = 250.0;
pub const RANK_SCALE: f64 = 8.0;
pub const RECENCY_HALF_LIFE_DAYS: f64 = 180.0;
pub const MATURITY_THRESHOLD: u32 = 200;
pub const MATURITY_MAX_PENALTY: f64 = 300.0;
pub const CALIBRATION_FLOOR: u32 = 30;
pub const MIN_DURATION_SECONDS: u32 = 480;
pub const MAX_VALID_LEAVER_STATUS: i32 = 1;

// Tier table geometry. Tiers 1-7 span TIER_SPAN points each starting at
// RATING_FLOOR, cut into 5 divisions; the top tier is open-ended.
pub const TIER_DIVISION_WIDTH: i32 = 180;
pub const TIER_DIVISIONS: i32 = 5;
pub const TIER_SPAN: i32 = TIER_DIVISION_WIDTH * TIER_DIVISIONS;

// Slot encoding from the match-history provider: slots 0-127 are the
// Radiant team, 128-255 the Dire team.
pub const DIRE_SLOT_OFFSET: i32 = 128;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
