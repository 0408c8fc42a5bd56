use crate::model::structures::{rating_breakdown::RatingBreakdown, raw_match::RawMatch};
use serde::{Deserialize, Serialize};
use std::{fs, io::Write, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error)
}

/// One player's full raw match history, as exported by the match-history
/// provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHistory {
    pub player_id: i64,
    pub matches: Vec<RawMatch>
}

/// One computed breakdown, keyed by player, as handed to the persistence
/// and leaderboard layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBreakdown {
    pub player_id: i64,
    pub breakdown: RatingBreakdown
}

/// Loads a snapshot file: a JSON array of player histories.
pub fn load_snapshot(path: &Path) -> Result<Vec<PlayerHistory>, SnapshotError> {
    let contents = fs::read_to_string(path)?;
    let histories: Vec<PlayerHistory> = serde_json::from_str(&contents)?;

    info!(
        players = histories.len(),
        matches = histories.iter().map(|h| h.matches.len()).sum::<usize>(),
        "loaded snapshot from {}",
        path.display()
    );

    Ok(histories)
}

/// Writes breakdowns as a JSON array, to the given file or to stdout.
pub fn write_breakdowns(path: Option<&Path>, breakdowns: &[PlayerBreakdown]) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(breakdowns)?;

    match path {
        Some(p) => {
            fs::write(p, json)?;
            info!(players = breakdowns.len(), "wrote breakdowns to {}", p.display());
        }
        None => {
            std::io::stdout().write_all(json.as_bytes())?;
        }
    }

    Ok(())
}
