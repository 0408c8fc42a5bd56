use crate::model::constants::DIRE_SLOT_OFFSET;
use serde::{Deserialize, Serialize};

/// Which team the player was on. Derived from `player_slot` in exactly one
/// place ([`RawMatch::side`]); every win/loss decision in the crate goes
/// through [`RawMatch::won`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Radiant,
    Dire
}

/// One participation record as delivered by the match-history provider.
/// Optional or malformed numeric fields default to 0 / None at
/// deserialization; nothing here can fail downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    pub match_id: i64,
    /// 0-127 = Radiant, 128-255 = Dire
    pub player_slot: i32,
    pub radiant_win: bool,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub hero_id: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    /// Unix seconds
    pub start_time: i64,
    /// Ordinal 0-80 indicator of the average skill of all participants
    #[serde(default)]
    pub average_rank: Option<u32>,
    #[serde(default)]
    pub leaver_status: Option<i32>,
    #[serde(default)]
    pub party_size: Option<u32>
}

impl RawMatch {
    pub fn side(&self) -> Side {
        if self.player_slot < DIRE_SLOT_OFFSET {
            Side::Radiant
        } else {
            Side::Dire
        }
    }

    pub fn won(&self) -> bool {
        match self.side() {
            Side::Radiant => self.radiant_win,
            Side::Dire => !self.radiant_win
        }
    }
}
