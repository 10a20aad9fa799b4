//! Flip Runner - a side-scrolling gravity-flip platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile streaming, physics, collisions, scoring)
//! - `config`: Data-driven tuning passed into each round
//! - `highscores`: Running-maximum score table fed from finished rounds
//! - `logging`: Logger setup for binaries

pub mod config;
pub mod error;
pub mod highscores;
pub mod logging;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, PatternError};
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Viewport defaults
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Tile image size (tiles are square)
    pub const TILE_SIZE: f32 = 32.0;
    /// Player sprite frame is narrower than the tile grid
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    pub const ENEMY_SIZE: f32 = 32.0;

    /// Gravity acceleration magnitude (pixels/s²)
    pub const MAX_GRAVITY: f32 = 400.0;
    /// Jump impulse magnitude (pixels/s)
    pub const MAX_JUMP: f32 = 300.0;
    /// Ascent cap once jump is released (pixels/s)
    pub const MAX_JUMP_CUT_OFF: f32 = 120.0;
    /// Per-step air drag multiplier on vertical velocity
    pub const DAMPING: f32 = 0.9;
    /// Vertical speed clamp (pixels/s)
    pub const MAX_VERTICAL_SPEED: f32 = 450.0;

    /// World scroll speed while the player pushes forward (pixels/s)
    pub const WORLD_MOVEMENT: f32 = 180.0;

    /// Cells per strip row
    pub const STRIP_WIDTH: usize = 40;
    /// Cell index marked as the strip's anchor
    pub const ANCHOR_INDEX: usize = 18;

    /// Scroll distance that earns one score increment (pixels)
    pub const SCORE_SCROLL_UNIT: f32 = 3.0;
    pub const SCORE_INCREMENT: u64 = 1;
    pub const COLLECTIBLE_BONUS: u64 = 100;

    /// Horizontal slack around the viewport before the player is out of bounds
    pub const BOUNDS_MARGIN: f32 = 10.0;
}
