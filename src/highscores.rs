//! High score leaderboard
//!
//! Top 10 scores, sorted descending, persisted as JSON in the platform data
//! directory. Top-ten membership is decided after insertion and truncation,
//! never estimated up front.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub character_name: String,
    pub character_type: String,
    pub score: i64,
    pub level_reached: u32,
    /// Unix timestamp in seconds
    pub timestamp: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    const FILE_NAME: &'static str = "scores.json";

    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score at its sorted position, truncate to the top 10, and
    /// report whether the entry survived the cut. Ties rank below existing
    /// entries with the same score.
    pub fn add_score(&mut self, entry: ScoreEntry) -> bool {
        let rank = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        // Membership is what's left after the truncation
        rank < MAX_HIGH_SCORES
    }

    /// The best `n` entries, highest first.
    pub fn get_top(&self, n: usize) -> Vec<ScoreEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    /// Whether `score` would make the board right now.
    pub fn is_high_score(&self, score: i64) -> bool {
        if score <= 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    pub fn top_score(&self) -> Option<i64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn storage_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("stellar-odyssey"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::FILE_NAME)
    }

    /// Load the board from disk; a missing or corrupt file starts fresh.
    pub fn load() -> Self {
        let path = Self::storage_path();
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Leaderboard>(&json) {
                Ok(board) => {
                    log::info!("Loaded {} high scores", board.entries.len());
                    board
                }
                Err(e) => {
                    log::warn!("Score file {:?} unreadable ({}), starting fresh", path, e);
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the board to disk. Failures are logged, never fatal.
    pub fn save(&self) {
        let path = Self::storage_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create {:?}: {}", parent, e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Could not write {:?}: {}", path, e);
                } else {
                    log::info!("High scores saved ({} entries)", self.entries.len());
                }
            }
            Err(e) => log::warn!("Could not serialize scores: {}", e),
        }
    }
}
