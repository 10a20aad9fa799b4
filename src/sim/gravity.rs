//! World gravity direction
//!
//! One flag per round. Flipping it inverts gravity, jump impulse and the
//! jump cutoff for every body at once.

use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;

/// Round-wide gravity direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityState {
    pub reversed: bool,
}

impl GravityState {
    pub fn new(reversed: bool) -> Self {
        Self { reversed }
    }

    /// Flip the direction, returning the new state of `reversed`
    pub fn toggle(&mut self) -> bool {
        self.reversed = !self.reversed;
        log::debug!("gravity reversed = {}", self.reversed);
        self.reversed
    }

    /// Signed per-step parameters for the current direction
    pub fn params(&self, physics: &PhysicsConfig) -> GravityParams {
        if self.reversed {
            GravityParams {
                gravity: physics.gravity,
                jump_impulse: -physics.jump_impulse,
                jump_cutoff: -physics.jump_cutoff,
            }
        } else {
            GravityParams {
                gravity: -physics.gravity,
                jump_impulse: physics.jump_impulse,
                jump_cutoff: physics.jump_cutoff,
            }
        }
    }
}

/// Signed gravity values. Positive velocity moves a body up the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityParams {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_cutoff: f32,
}
