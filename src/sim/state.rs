//! Round state and core simulation types
//!
//! Everything a round needs lives here and is rebuilt from the config for
//! every new round.

use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::gravity::GravityState;
use super::score::ScoreTracker;
use super::streamer::TileStreamer;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Player left the viewport (plus margin)
    OutOfBounds,
    /// Player touched a hazard tile
    Hazard,
    /// An enemy touched the player
    Enemy,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Running,
    Ended(EndCause),
}

/// Fire-and-forget notifications for audio, animation and score storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player's jump impulse fired
    Jump,
    /// Player hit a hazard or an enemy
    Hurt,
    /// A collectible was consumed
    Collectible,
    /// World gravity toggled
    GravityFlip,
    /// Round finished with this final score
    RoundOver { score: u64, cause: EndCause },
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: RoundPhase,
    pub player: PhysicsBody,
    /// Tiles and enemies
    pub world: TileStreamer,
    pub gravity: GravityState,
    pub score: ScoreTracker,
    /// Pending notifications, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh round: validate the config, lay the first strip, spawn the player.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let mut world = TileStreamer::from_config(&config)?;
        world.generate_initial_strip();

        let player = PhysicsBody::player(config.player_spawn_point(), config.player_size);
        let gravity = GravityState::new(config.initial_gravity_reversed);

        log::debug!(
            "round start: {} tiles, {} enemies",
            world.tiles.len(),
            world.enemies.len()
        );

        Ok(Self {
            config,
            time_ticks: 0,
            phase: RoundPhase::Running,
            player,
            world,
            gravity,
            score: ScoreTracker::new(),
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::Ended(_))
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        match self.phase {
            RoundPhase::Ended(cause) => Some(cause),
            RoundPhase::Running => None,
        }
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score.score()
    }

    /// End the round and report the final score
    pub fn end_round(&mut self, cause: EndCause) {
        if self.is_over() {
            return;
        }
        self.phase = RoundPhase::Ended(cause);
        let score = self.score();
        log::info!(
            "round over after {} ticks: {:?}, score {}",
            self.time_ticks,
            cause,
            score
        );
        self.events.push(GameEvent::RoundOver { score, cause });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
