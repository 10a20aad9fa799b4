//! Collision detection and response against tiles and other bodies
//!
//! Every query uses the body's tentative box (`desired_position`). None of
//! these functions commit a body; the driving loop does that once per step.

use super::aabb::{overlap_x, overlap_y};
use super::body::PhysicsBody;
use super::gravity::GravityState;
use super::score::ScoreTracker;
use super::tile::{Tile, TileKind};
use crate::config::ScoreConfig;

/// How a wall tile was resolved against a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    /// Tile on the gravity side: body stands on it
    Floor,
    /// Tile to the right: body pushed back left
    Side,
    /// Tile against gravity: body pushed away from it
    Ceiling,
}

#[inline]
fn touching<'a>(
    tiles: &'a [Tile],
    kind: TileKind,
    body: &'a PhysicsBody,
) -> impl Iterator<Item = (usize, &'a Tile)> + 'a {
    tiles.iter().enumerate().filter(move |(_, tile)| {
        tile.kind == kind && tile.is_on_screen() && tile.bounds().intersects(&body.bounds())
    })
}

/// Resolve one wall tile against the body's tentative box
fn resolve_wall(tile: &Tile, body: &mut PhysicsBody, gravity: &GravityState) -> Option<WallContact> {
    let tile_box = tile.bounds();
    let body_box = body.bounds();
    if !tile_box.intersects(&body_box) {
        return None;
    }

    let tile_c = tile_box.center();
    let body_c = body_box.center();

    // Screen-space direction that points away from the floor
    let away = if gravity.reversed { 1.0 } else { -1.0 };
    let on_floor_side = if gravity.reversed {
        tile_c.y < body_c.y
    } else {
        tile_c.y > body_c.y
    };
    let on_ceiling_side = if gravity.reversed {
        tile_c.y > body_c.y
    } else {
        tile_c.y < body_c.y
    };

    if on_floor_side {
        body.desired_position.y += away * overlap_y(&body_box, &tile_box);
        body.velocity.y = 0.0;
        body.on_ground = true;
        Some(WallContact::Floor)
    } else if tile_c.x > body_c.x {
        // The player never moves backwards, so walls only push left
        body.desired_position.x -= overlap_x(&body_box, &tile_box);
        Some(WallContact::Side)
    } else if on_ceiling_side {
        body.desired_position.y -= away * overlap_y(&body_box, &tile_box);
        Some(WallContact::Ceiling)
    } else {
        None
    }
}

/// Resolve the body against every on-screen wall tile, once each, in list order.
///
/// Resets `on_ground` first. A correction is never re-checked against tiles
/// already visited, so overlapping several tiles at once can leave a small
/// residual penetration.
pub fn resolve_floor(tiles: &[Tile], body: &mut PhysicsBody, gravity: &GravityState) -> Vec<WallContact> {
    body.on_ground = false;

    let mut contacts = Vec::new();
    for tile in tiles {
        if tile.kind != TileKind::Wall || !tile.is_on_screen() {
            continue;
        }
        if let Some(contact) = resolve_wall(tile, body, gravity) {
            contacts.push(contact);
        }
    }
    contacts
}

/// Kill the body if it touches a hazard. The hazard stays in the world.
pub fn check_hazard(tiles: &[Tile], body: &mut PhysicsBody) -> bool {
    if touching(tiles, TileKind::Hazard, &*body).next().is_some() {
        body.alive = false;
        return true;
    }
    false
}

/// Toggle gravity on the first gravity-flip tile touched and remove that tile.
pub fn check_gravity_flip(
    tiles: &mut Vec<Tile>,
    body: &PhysicsBody,
    gravity: &mut GravityState,
) -> bool {
    let hit = touching(tiles.as_slice(), TileKind::GravityFlip, body).map(|(i, _)| i).next();
    match hit {
        Some(index) => {
            tiles.remove(index);
            gravity.toggle();
            true
        }
        None => false,
    }
}

/// Consume the first collectible touched and bank its bonus.
///
/// At most one collectible per call, even when several overlap.
pub fn check_collectible(
    tiles: &mut Vec<Tile>,
    body: &PhysicsBody,
    score: &mut ScoreTracker,
    config: &ScoreConfig,
) -> bool {
    let hit = touching(tiles.as_slice(), TileKind::Collectible, body).map(|(i, _)| i).next();
    match hit {
        Some(index) => {
            tiles.remove(index);
            score.add_collectible(config);
            true
        }
        None => false,
    }
}

/// Plain AABB test between two bodies; no push-apart.
///
/// Only a player `other` is killed. Enemies may overlap freely.
pub fn check_bodies(body: &PhysicsBody, other: &mut PhysicsBody) -> bool {
    if body.bounds().intersects(&other.bounds()) {
        if other.is_player() {
            other.alive = false;
        }
        return true;
    }
    false
}
