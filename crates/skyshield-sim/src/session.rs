//! Session aggregate: everything one game session owns.
//!
//! A session is created on `Start`/`Reset` and replaced wholesale on the
//! next one. Nothing outlives it except the engine's RNG.

use hecs::World;

use skyshield_core::components::{Emplacement, Structure};
use skyshield_core::constants::{EMPLACEMENT_COUNT, STRUCTURE_COUNT};
use skyshield_core::enums::GameStatus;
use skyshield_core::state::StatsView;
use skyshield_core::types::{EntityIdAllocator, SimTime};

use crate::world_setup;

/// Running score and counters.
///
/// Points are unsigned and penalties saturate, so the score never drops
/// below zero.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub points: u32,
    pub projectiles_spawned: u32,
    pub projectiles_destroyed: u32,
    pub impacts: u32,
    pub interceptors_launched: u32,
    pub pickups_collected: u32,
}

impl ScoreState {
    pub fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn penalize(&mut self, points: u32) {
        self.points = self.points.saturating_sub(points);
    }

    pub fn stats(&self) -> StatsView {
        StatsView {
            projectiles_spawned: self.projectiles_spawned,
            projectiles_destroyed: self.projectiles_destroyed,
            impacts: self.impacts,
            interceptors_launched: self.interceptors_launched,
            pickups_collected: self.pickups_collected,
        }
    }
}

/// Spawner bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    /// Simulation time of the last spawn tick (milliseconds).
    pub last_spawn_ms: f64,
}

/// One game session.
pub struct Session {
    /// Live projectiles, interceptors, blasts and pickups.
    pub world: World,
    pub status: GameStatus,
    pub time: SimTime,
    pub score: ScoreState,
    pub emplacements: [Emplacement; EMPLACEMENT_COUNT],
    pub structures: [Structure; STRUCTURE_COUNT],
    pub ids: EntityIdAllocator,
    pub spawn_clock: SpawnClock,
    /// Simulation time (seconds) at which the slow-time effect ends.
    pub slow_time_until: Option<f64>,
}

impl Session {
    /// A session in its initial configuration with the given status.
    pub fn new(status: GameStatus) -> Self {
        Self {
            world: World::new(),
            status,
            time: SimTime::default(),
            score: ScoreState::default(),
            emplacements: world_setup::initial_emplacements(),
            structures: world_setup::initial_structures(),
            ids: EntityIdAllocator::new(),
            spawn_clock: SpawnClock::default(),
            slow_time_until: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn slow_time_active(&self) -> bool {
        self.slow_time_until
            .is_some_and(|until| self.time.elapsed_secs < until)
    }

    pub fn slow_time_remaining_secs(&self) -> f64 {
        self.slow_time_until
            .map(|until| (until - self.time.elapsed_secs).max(0.0))
            .unwrap_or(0.0)
    }

    /// Restart the slow-time window from now. Re-triggering does not stack.
    pub fn trigger_slow_time(&mut self, duration_secs: f64) {
        self.slow_time_until = Some(self.time.elapsed_secs + duration_secs);
    }

    pub fn all_emplacements_inactive(&self) -> bool {
        self.emplacements.iter().all(|e| !e.active)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameStatus::NotStarted)
    }
}
