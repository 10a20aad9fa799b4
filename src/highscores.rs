//! High score leaderboard
//!
//! Tracks the top 10 final scores and the best score ever seen. Storage is
//! left to the caller; the table is plain serde data.

use serde::{Deserialize, Serialize};

use crate::sim::EndCause;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the round
    pub score: u64,
    /// Round length in simulation ticks
    pub ticks: u64,
    /// None when the round was cut off before it ended
    pub cause: Option<EndCause>,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    /// Sorted descending by score
    pub entries: Vec<HighScoreEntry>,
    /// Running maximum, kept even once its entry could no longer be listed
    pub best: u64,
    /// Rounds reported, qualifying or not
    pub rounds: u64,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Report a finished round.
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, score: u64, ticks: u64, cause: Option<EndCause>) -> Option<usize> {
        self.rounds += 1;
        self.best = self.best.max(score);

        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            ticks,
            cause,
        };

        // Ties keep the earlier round ahead
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        log::debug!("score {} ranked #{}", score, rank);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score reported so far (if any round scored)
    pub fn top_score(&self) -> Option<u64> {
        (self.best > 0).then_some(self.best)
    }
}
