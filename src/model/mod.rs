use crate::model::{
    composer::WeightedWinFormula,
    config::FormulaConfig,
    structures::{rating_breakdown::RatingBreakdown, raw_match::RawMatch}
};
use chrono::{DateTime, Utc};
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

pub mod composer;
pub mod config;
pub mod constants;
pub mod heroes;
pub mod structures;
pub mod tiers;
pub mod validation;
pub mod weighting;
pub mod win_rate;

/// A complete rating formula revision: full match history in, breakdown
/// out. Implementations are pure; the caller supplies `as_of` so repeated
/// runs over the same input are byte-for-byte identical.
pub trait RatingFormula {
    fn version(&self) -> FormulaVersion;
    fn rate(&self, matches: &[RawMatch], as_of: DateTime<Utc>) -> RatingBreakdown;
}

/// Formula revisions. 1 (sequential delta) and 2 (aggregate Wilson) are
/// retired; their numbers stay reserved so stored breakdowns remain
/// attributable.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FormulaVersion {
    WeightedWins = 3
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaVersionError {
    #[error("formula version {0} is retired and can no longer be computed")]
    Retired(u8),

    #[error("unknown formula version {0}")]
    Unknown(u8)
}

impl TryFrom<u8> for FormulaVersion {
    type Error = FormulaVersionError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 | 2 => Err(FormulaVersionError::Retired(v)),
            3 => Ok(FormulaVersion::WeightedWins),
            other => Err(FormulaVersionError::Unknown(other))
        }
    }
}

/// Factory for the versioned strategies. New revisions slot in here
/// without touching the trait or its callers.
pub fn create_formula(version: FormulaVersion, config: FormulaConfig) -> Box<dyn RatingFormula + Send + Sync> {
    match version {
        FormulaVersion::WeightedWins => Box::new(WeightedWinFormula::new(config))
    }
}
