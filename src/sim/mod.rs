//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (generation order of tiles and enemies)
//! - Screen-space coordinates, y grows downward
//! - No rendering, audio or platform dependencies

pub mod aabb;
pub mod body;
pub mod collision;
pub mod gravity;
pub mod pattern;
pub mod score;
pub mod state;
pub mod streamer;
pub mod tick;
pub mod tile;

pub use aabb::Aabb;
pub use body::{BodyRole, PhysicsBody};
pub use collision::{
    WallContact, check_bodies, check_collectible, check_gravity_flip, check_hazard, resolve_floor,
};
pub use gravity::{GravityParams, GravityState};
pub use pattern::StripPattern;
pub use score::ScoreTracker;
pub use state::{EndCause, GameEvent, GameState, RoundPhase};
pub use streamer::{ScrollReport, TileStreamer};
pub use tick::{TickInput, is_out_of_bounds, tick};
pub use tile::{CellCode, Tile, TileKind};
