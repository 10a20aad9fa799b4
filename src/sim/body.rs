//! Physics bodies (player and enemies)
//!
//! A body integrates into `desired_position`; collision resolution corrects
//! that tentative location and the driving loop commits it once per step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::gravity::GravityState;
use crate::config::PhysicsConfig;

/// Who a body is. Only the player can be killed by body contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyRole {
    Player,
    Enemy,
}

/// A moving entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub role: BodyRole,
    /// Last committed, collision-safe top-left corner
    pub position: Vec2,
    /// Tentative top-left corner for the current step
    pub desired_position: Vec2,
    /// Only `y` is ever non-zero; positive is up the screen
    pub velocity: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    pub moving_forward: bool,
    /// Jump intent (held)
    pub jumping: bool,
    pub alive: bool,
    /// Total X clamped away by `commit_with_min_x` (negative = pushed back)
    pub distance_moved: f32,
}

impl PhysicsBody {
    pub fn new(role: BodyRole, position: Vec2, size: Vec2) -> Self {
        Self {
            role,
            position,
            desired_position: position,
            velocity: Vec2::ZERO,
            size,
            on_ground: false,
            moving_forward: true,
            jumping: false,
            alive: true,
            distance_moved: 0.0,
        }
    }

    pub fn player(position: Vec2, size: Vec2) -> Self {
        Self::new(BodyRole::Player, position, size)
    }

    /// Enemies hold jump permanently, so they hop whenever grounded
    pub fn enemy(position: Vec2, size: Vec2) -> Self {
        Self {
            jumping: true,
            ..Self::new(BodyRole::Enemy, position, size)
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.role == BodyRole::Player
    }

    /// Collision box at the tentative location
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.desired_position, self.size)
    }

    /// Collision box at the committed location
    #[inline]
    pub fn committed_bounds(&self) -> Aabb {
        Aabb::from_origin(self.position, self.size)
    }

    /// Integrate one step of gravity and jump.
    ///
    /// Returns true when the jump impulse was consumed this step.
    pub fn integrate(&mut self, gravity: &GravityState, physics: &PhysicsConfig, dt: f32) -> bool {
        let params = gravity.params(physics);

        let mut vy = (self.velocity.y + params.gravity * dt) * physics.damping;

        let mut jumped = false;
        if self.jumping && self.on_ground {
            vy += params.jump_impulse;
            jumped = true;
        } else if !self.jumping {
            // Releasing jump early caps the ascent
            let rising_past_cutoff = if gravity.reversed {
                vy < params.jump_cutoff
            } else {
                vy > params.jump_cutoff
            };
            if rising_past_cutoff {
                vy = params.jump_cutoff;
            }
        }

        vy = vy.clamp(-physics.max_speed, physics.max_speed);
        self.velocity = Vec2::new(0.0, vy);

        // X is driven by world scroll, not velocity
        self.desired_position = Vec2::new(self.position.x, self.position.y - vy * dt);

        jumped
    }

    /// Accept the (resolved) tentative location
    #[inline]
    pub fn commit(&mut self) {
        self.position = self.desired_position;
    }

    /// Commit, holding X at or above `min_x` and recording how far it was held
    pub fn commit_with_min_x(&mut self, min_x: f32) {
        if self.desired_position.x < min_x {
            self.distance_moved += self.desired_position.x - min_x;
            self.desired_position.x = min_x;
        }
        self.commit();
    }

    /// Shift left with the world
    #[inline]
    pub fn scroll(&mut self, amount: f32) {
        self.position.x -= amount;
        self.desired_position.x -= amount;
    }

    /// False once the body has scrolled fully past the left edge
    #[inline]
    pub fn is_on_screen(&self) -> bool {
        self.position.x + self.size.x > 0.0
    }
}
