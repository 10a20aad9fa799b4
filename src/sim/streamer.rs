//! World builder: strip generation, scrolling and recycling
//!
//! The world never ends. Each strip carries one anchor tile; once the anchor
//! scrolls off the left edge the next strip is queued just beyond the right
//! edge of the viewport.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::pattern::StripPattern;
use super::tile::{CellCode, Tile};
use crate::config::SimConfig;
use crate::error::ConfigError;

/// What one call to [`TileStreamer::advance`] did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollReport {
    /// Distance the world moved left, pixels
    pub distance: f32,
    pub tiles_removed: usize,
    pub enemies_removed: usize,
    /// A new strip was generated after the sweep
    pub appended: bool,
}

/// Owns the live tiles and enemy bodies of a round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileStreamer {
    pattern: StripPattern,
    tile_size: Vec2,
    enemy_size: Vec2,
    /// Viewport width used for spawn/recycle thresholds
    scroll_width: f32,
    /// Live tiles in generation order
    pub tiles: Vec<Tile>,
    /// Live enemies in generation order
    pub enemies: Vec<PhysicsBody>,
    strips_generated: u32,
}

impl TileStreamer {
    /// Empty world; call [`generate_initial_strip`](Self::generate_initial_strip) to populate
    pub fn new(pattern: StripPattern, tile_size: f32, enemy_size: Vec2, scroll_width: f32) -> Self {
        Self {
            pattern,
            tile_size: Vec2::splat(tile_size),
            enemy_size,
            scroll_width,
            tiles: Vec::new(),
            enemies: Vec::new(),
            strips_generated: 0,
        }
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        let pattern = config.validate()?;
        Ok(Self::new(
            pattern,
            config.tile_size,
            config.enemy_size,
            config.scroll_width(),
        ))
    }

    pub fn pattern(&self) -> &StripPattern {
        &self.pattern
    }

    #[inline]
    pub fn scroll_width(&self) -> f32 {
        self.scroll_width
    }

    /// Number of strips generated so far (initial strip included)
    #[inline]
    pub fn strips_generated(&self) -> u32 {
        self.strips_generated
    }

    /// Populate the world from the pattern at the viewport origin
    pub fn generate_initial_strip(&mut self) {
        self.spawn_strip(0);
    }

    /// Generate the next strip just beyond the right edge of the viewport
    pub fn append_strip(&mut self) {
        let offset_cells = (self.scroll_width / self.tile_size.x).floor() as i32;
        self.spawn_strip(offset_cells);
    }

    fn spawn_strip(&mut self, offset_cells: i32) {
        let strip = self.strips_generated;
        let anchor = self.pattern.anchor_index();
        let mut tiles = 0usize;
        let mut enemies = 0usize;

        for (i, x, y, cell) in self.pattern.cells() {
            let grid_x = x + offset_cells;
            match cell {
                CellCode::Tile(kind) => {
                    let mut tile = Tile::new(kind, grid_x, y, self.tile_size, strip);
                    tile.is_anchor = i == anchor;
                    self.tiles.push(tile);
                    tiles += 1;
                }
                CellCode::EnemySpawn => {
                    let pos = Vec2::new(
                        grid_x as f32 * self.tile_size.x,
                        y as f32 * self.tile_size.y,
                    );
                    self.enemies.push(PhysicsBody::enemy(pos, self.enemy_size));
                    enemies += 1;
                }
                CellCode::Empty => {}
            }
        }

        self.strips_generated += 1;
        log::debug!(
            "strip {} generated at cell offset {}: {} tiles, {} enemies",
            strip,
            offset_cells,
            tiles,
            enemies
        );
    }

    /// Scroll the world left and recycle everything that left the viewport.
    ///
    /// The next strip is generated only after the sweep, and at most once per step.
    pub fn advance(&mut self, dt: f32, scroll_speed: f32) -> ScrollReport {
        let amount = scroll_speed * dt;
        let mut anchor_gone = false;

        // retain_mut compacts in place without skipping the element after a removal
        let before = self.tiles.len();
        self.tiles.retain_mut(|tile| {
            tile.scroll(amount);
            if tile.is_on_screen() {
                true
            } else {
                anchor_gone |= tile.is_anchor;
                false
            }
        });
        let tiles_removed = before - self.tiles.len();

        let before = self.enemies.len();
        self.enemies.retain_mut(|enemy| {
            enemy.scroll(amount);
            enemy.is_on_screen()
        });
        let enemies_removed = before - self.enemies.len();

        if anchor_gone {
            self.append_strip();
        }

        ScrollReport {
            distance: amount,
            tiles_removed,
            enemies_removed,
            appended: anchor_gone,
        }
    }
}
