//! Score leaderboard - the result recorder behind completed rounds
//!
//! Keeps the top 10 scores, persisted as plain JSON. The game loop treats
//! recording as fire-and-forget: load tolerates a missing or corrupt file,
//! save failures are logged and swallowed, and the simulation never observes
//! a recorder error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of leaderboard entries to keep
pub const MAX_ENTRIES: usize = 10;

/// Environment variable overriding the leaderboard file location
pub const SCORES_PATH_ENV: &str = "DROPSHOT_SCORES";

const DEFAULT_FILE: &str = ".dropshot_scores.json";

/// A single recorded round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub player: String,
    /// Unix timestamp (seconds) when the round completed
    pub timestamp: u64,
}

/// Ordered leaderboard (highest score first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would make the board. Misses (score 0) never qualify.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Insert a score, keeping the board sorted and trimmed.
    ///
    /// Returns the 1-indexed rank achieved, or `None` if it didn't qualify.
    pub fn add_score(&mut self, score: u32, player: &str, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = ScoreEntry {
            score,
            player: player.to_string(),
            timestamp,
        };

        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_ENTRIES);

        Some(pos + 1)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a board from disk. Missing or unreadable files yield an empty
    /// board rather than an error.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<ScoreBoard>(&json) {
                Ok(board) => board,
                Err(err) => {
                    log::warn!("ignoring corrupt score file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize scoreboard")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

/// Leaderboard file location: `$DROPSHOT_SCORES` or a dotfile in the
/// working directory.
pub fn default_path() -> PathBuf {
    std::env::var_os(SCORES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}

/// Fire-and-forget recorder used by the game loop.
///
/// Owns the loaded board and its file path; `record` persists after every
/// accepted score and reports failures only to the log.
pub struct ScoreRecorder {
    path: PathBuf,
    board: ScoreBoard,
}

impl ScoreRecorder {
    pub fn open(path: PathBuf) -> Self {
        let board = ScoreBoard::load_from(&path);
        Self { path, board }
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// Record one completed round. Returns the rank achieved, if any.
    pub fn record(&mut self, score: u32, player: &str) -> Option<usize> {
        let rank = self.board.add_score(score, player, now_unix())?;
        log::info!("recorded score {score} for {player} (rank {rank})");
        if let Err(err) = self.board.save_to(&self.path) {
            log::warn!("failed to save scores: {err:#}");
        }
        Some(rank)
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
