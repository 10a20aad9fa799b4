//! Flip Runner headless entry point
//!
//! Plays seeded autopilot rounds through the fixed-step loop and prints the
//! resulting score table as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use flip_runner::consts::{MAX_SUBSTEPS, SIM_DT};
use flip_runner::sim::{GameEvent, GameState, TickInput, tick};
use flip_runner::{HighScores, SimConfig, logging};

/// Chance per frame that the autopilot toggles jump
const JUMP_TOGGLE_CHANCE: f64 = 0.08;
/// Chance per frame that the autopilot toggles forward
const FORWARD_TOGGLE_CHANCE: f64 = 0.01;
/// Render frame duration range the runner pretends to see (seconds)
const FRAME_TIME: std::ops::Range<f32> = (1.0 / 75.0)..(1.0 / 40.0);

/// Headless gravity-flip platformer runner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value_t = 5)]
    rounds: u32,

    /// Autopilot seed (round n uses seed + n)
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Cut a round off after this many simulation ticks
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_ticks: u64,

    /// JSON config file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// One round driven by a seeded autopilot
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    rng: Pcg32,
}

impl Game {
    fn new(config: SimConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            state: GameState::new(config)?,
            accumulator: 0.0,
            input: TickInput::held(false, true),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Flip held intents at random, like a restless player
    fn steer(&mut self) {
        if self.rng.random_bool(JUMP_TOGGLE_CHANCE) {
            self.input.jump = Some(!self.input.jump.unwrap_or(false));
        }
        if self.rng.random_bool(FORWARD_TOGGLE_CHANCE) {
            self.input.forward = Some(!self.input.forward.unwrap_or(true));
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    fn play(&mut self, max_ticks: u64) {
        while !self.state.is_over() && self.state.time_ticks < max_ticks {
            self.steer();
            let frame = self.rng.random_range(FRAME_TIME);
            self.update(frame);

            // Round end is already logged by the state
            for event in self.state.drain_events() {
                if !matches!(event, GameEvent::RoundOver { .. }) {
                    log::trace!("tick {}: {:?}", self.state.time_ticks, event);
                }
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config = SimConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(args.config.as_deref())?;
    log::info!("Flip Runner starting: {} rounds, seed {}", args.rounds, args.seed);

    let mut scores = HighScores::new();
    for round in 0..args.rounds {
        let mut game = Game::new(config.clone(), args.seed.wrapping_add(round as u64))?;
        game.play(args.max_ticks);

        let state = &game.state;
        if state.end_cause().is_none() {
            log::warn!("round {} cut off at {} ticks", round, state.time_ticks);
        }
        let rank = scores.add_score(state.score(), state.time_ticks, state.end_cause());
        log::info!(
            "round {}: score {} in {} ticks ({:?}), rank {:?}",
            round,
            state.score(),
            state.time_ticks,
            state.end_cause(),
            rank
        );
    }

    println!("{}", serde_json::to_string_pretty(&scores)?);
    Ok(())
}
