//! Static world cells

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Solid ground/ceiling/wall
    Wall,
    /// Kills the player on contact
    Hazard,
    /// Coin worth a score bonus, consumed on touch
    Collectible,
    /// Toggles world gravity, consumed on touch
    GravityFlip,
}

/// What a pattern cell code produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCode {
    Tile(TileKind),
    EnemySpawn,
    Empty,
}

impl CellCode {
    pub const WALL: i32 = 0;
    pub const HAZARD: i32 = 1;
    pub const COLLECTIBLE: i32 = 2;
    pub const EMPTY: i32 = 3;
    pub const GRAVITY_FLIP: i32 = 4;
    pub const ENEMY_SPAWN: i32 = 5;

    /// Decode a raw cell; unknown codes are empty
    pub fn from_code(code: i32) -> Self {
        match code {
            Self::WALL => CellCode::Tile(TileKind::Wall),
            Self::HAZARD => CellCode::Tile(TileKind::Hazard),
            Self::COLLECTIBLE => CellCode::Tile(TileKind::Collectible),
            Self::GRAVITY_FLIP => CellCode::Tile(TileKind::GravityFlip),
            Self::ENEMY_SPAWN => CellCode::EnemySpawn,
            _ => CellCode::Empty,
        }
    }
}

/// A tile entity
///
/// Kind, grid cell and size never change; only `pos` moves as the world scrolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Origin cell (already offset for appended strips)
    pub grid_x: i32,
    pub grid_y: i32,
    /// Top-left corner in screen space
    pub pos: Vec2,
    pub size: Vec2,
    /// Removal of this tile requests the next strip
    pub is_anchor: bool,
    /// Sequence number of the strip that generated this tile (0 = initial)
    pub strip: u32,
}

impl Tile {
    pub fn new(kind: TileKind, grid_x: i32, grid_y: i32, size: Vec2, strip: u32) -> Self {
        Self {
            kind,
            grid_x,
            grid_y,
            pos: Vec2::new(grid_x as f32 * size.x, grid_y as f32 * size.y),
            size,
            is_anchor: false,
            strip,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.pos, self.size)
    }

    /// Shift left by the scroll amount
    #[inline]
    pub fn scroll(&mut self, amount: f32) {
        self.pos.x -= amount;
    }

    /// False once the tile has scrolled fully past the left edge
    #[inline]
    pub fn is_on_screen(&self) -> bool {
        self.pos.x > -self.size.x
    }
}
