//! Simulation tuning
//!
//! Passed explicitly into each round. Every field has a default, so a JSON
//! document only needs the values it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::pattern::{self, StripPattern};

/// Visible area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Gravity and jump magnitudes (unsigned; direction comes from `GravityState`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration, pixels/s²
    pub gravity: f32,
    /// One-shot impulse added when a grounded body jumps, pixels/s
    pub jump_impulse: f32,
    /// Ascent speed cap once jump intent is released, pixels/s
    pub jump_cutoff: f32,
    /// Multiplier applied to vertical velocity every step
    pub damping: f32,
    /// Vertical speed clamp, pixels/s
    pub max_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: MAX_GRAVITY,
            jump_impulse: MAX_JUMP,
            jump_cutoff: MAX_JUMP_CUT_OFF,
            damping: DAMPING,
            max_speed: MAX_VERTICAL_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Scroll distance per increment, pixels
    pub scroll_unit: f32,
    pub increment: u64,
    pub collectible_bonus: u64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            scroll_unit: SCORE_SCROLL_UNIT,
            increment: SCORE_INCREMENT,
            collectible_bonus: COLLECTIBLE_BONUS,
        }
    }
}

/// Complete round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub viewport: ViewportConfig,
    /// Tile image edge length (tiles are square)
    pub tile_size: f32,
    pub player_size: Vec2,
    pub enemy_size: Vec2,
    pub physics: PhysicsConfig,
    pub score: ScoreConfig,
    /// World scroll speed while the player pushes forward, pixels/s
    pub scroll_speed: f32,
    /// Player spawn point as a fraction of the viewport
    pub player_spawn: Vec2,
    /// Horizontal slack outside the viewport before the round ends
    pub bounds_margin: f32,
    pub initial_gravity_reversed: bool,
    pub strip_width: usize,
    pub anchor_index: usize,
    /// Cell codes, bottom row first
    pub pattern: Vec<i32>,
    /// Floor for the player's committed X; clamped distance is accumulated
    pub player_min_x: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            tile_size: TILE_SIZE,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            enemy_size: Vec2::splat(ENEMY_SIZE),
            physics: PhysicsConfig::default(),
            score: ScoreConfig::default(),
            scroll_speed: WORLD_MOVEMENT,
            player_spawn: Vec2::new(0.3, 0.6),
            bounds_margin: BOUNDS_MARGIN,
            initial_gravity_reversed: false,
            strip_width: STRIP_WIDTH,
            anchor_index: ANCHOR_INDEX,
            pattern: pattern::default_codes(),
            player_min_x: None,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes and build the validated pattern
    pub fn validate(&self) -> Result<StripPattern, ConfigError> {
        let positives = [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("tile_size", self.tile_size),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
            ("enemy_size.x", self.enemy_size.x),
            ("enemy_size.y", self.enemy_size.y),
            ("score.scroll_unit", self.score.scroll_unit),
            ("physics.max_speed", self.physics.max_speed),
        ];
        for (name, value) in positives {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let non_negatives = [
            ("physics.gravity", self.physics.gravity),
            ("physics.jump_impulse", self.physics.jump_impulse),
            ("physics.jump_cutoff", self.physics.jump_cutoff),
            ("scroll_speed", self.scroll_speed),
        ];
        for (name, value) in non_negatives {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        let damping = self.physics.damping;
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(ConfigError::Damping(damping));
        }

        Ok(StripPattern::from_codes(
            self.pattern.clone(),
            self.strip_width,
            self.anchor_index,
        )?)
    }

    /// Width used for spawn/recycle thresholds
    #[inline]
    pub fn scroll_width(&self) -> f32 {
        self.viewport.width
    }

    /// Player spawn point in pixels
    pub fn player_spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.viewport.width * self.player_spawn.x,
            self.viewport.height * self.player_spawn.y,
        )
    }
}
