//! Simulation engine: the frame driver.
//!
//! `SimulationEngine` owns the current session, applies player commands
//! between ticks, runs every system once per tick and produces
//! `GameStateSnapshot`s. Completely headless, so a seeded engine is fully
//! reproducible in tests.

use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyshield_core::commands::PlayerCommand;
use skyshield_core::config::{ConfigError, Tuning};
use skyshield_core::constants::DT;
use skyshield_core::enums::GameStatus;
use skyshield_core::events::AudioEvent;
use skyshield_core::state::GameStateSnapshot;
use skyshield_core::types::SimTime;

use crate::session::Session;
use crate::systems;

/// Configuration for a simulation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. `None` draws a fresh seed, so every run plays differently.
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

/// The frame driver. Owns the session and all per-engine state.
pub struct SimulationEngine {
    config: SimConfig,
    seed: u64,
    session: Session,
    rng: ChaCha8Rng,
    paused: bool,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create an engine with a not-started session.
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            session: Session::default(),
            paused: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Create an engine after validating the tuning.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.tuning.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one nominal tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.step(DT)
    }

    /// Advance by one tick lasting `dt` seconds of host time.
    ///
    /// Queued commands are applied first. Systems only run while the
    /// session is running and the engine is not paused.
    pub fn step(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.session.is_running() && !self.paused {
            self.run_systems();
            self.session.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(&self.session, self.paused, audio_events)
    }

    /// Apply a single command immediately, between ticks.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire { x, y } => {
                if !self.session.is_running() || self.paused {
                    debug!("fire ignored: session not accepting input");
                    return;
                }
                systems::dispatch::fire(&mut self.session, Vec2::new(x, y), &self.config.tuning);
            }
            PlayerCommand::Start => {
                if self.session.status.can_start() {
                    self.start_session();
                } else {
                    debug!("start ignored: session already running");
                }
            }
            PlayerCommand::Reset => self.start_session(),
            PlayerCommand::Pause => {
                if self.session.is_running() {
                    self.paused = true;
                }
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
        }
    }

    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    pub fn score(&self) -> u32 {
        self.session.score.points
    }

    pub fn time(&self) -> SimTime {
        self.session.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seed actually in use, whether configured or drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session access for scenario setup in tests.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Replace the session with a fresh running one.
    fn start_session(&mut self) {
        self.session = Session::new(GameStatus::Running);
        self.paused = false;
        info!("session started (seed {})", self.seed);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tuning = &self.config.tuning;
        // 1. Spawning
        systems::spawner::run(&mut self.session, &mut self.rng, tuning);
        // 2. Movement, impacts, blast growth, ammunition check
        systems::physics::run(
            &mut self.session,
            tuning,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 3. Blast collisions
        systems::collision::run(
            &mut self.session,
            tuning,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 4. Pickup expiry
        systems::cleanup::run(&mut self.session, &mut self.despawn_buffer);
        // 5. Win/loss check, after every other mutation
        systems::status::run(&mut self.session, &mut self.audio_events);

        log::trace!(
            "tick {}: {} entities, score {}",
            self.session.time.tick,
            self.session.world.len(),
            self.session.score.points
        );
    }
}
