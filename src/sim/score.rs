//! Round score
//!
//! Scroll distance is banked so that the score follows distance travelled,
//! not frame count.

use serde::{Deserialize, Serialize};

use crate::config::ScoreConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    /// Scroll distance not yet converted into score
    carry: f32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Bank scroll distance; returns points awarded
    pub fn add_distance(&mut self, distance: f32, config: &ScoreConfig) -> u64 {
        if !(distance > 0.0) {
            return 0;
        }
        self.carry += distance;
        let units = (self.carry / config.scroll_unit).floor();
        self.carry -= units * config.scroll_unit;
        let points = units as u64 * config.increment;
        self.score += points;
        points
    }

    /// Fixed bonus for one collectible
    pub fn add_collectible(&mut self, config: &ScoreConfig) -> u64 {
        self.score += config.collectible_bonus;
        config.collectible_bonus
    }
}
