//! Game state snapshot: the complete read-only view handed to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{Blast, Emplacement, Interceptor, Pickup, Projectile, Structure};
use crate::enums::{GameStatus, PickupKind};
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub paused: bool,
    pub score: u32,
    pub stats: StatsView,
    /// Seconds left on the slow-time effect (0 when inactive).
    pub slow_time_remaining_secs: f64,
    pub emplacements: Vec<Emplacement>,
    pub structures: Vec<Structure>,
    pub projectiles: Vec<ProjectileView>,
    pub interceptors: Vec<InterceptorView>,
    pub blasts: Vec<Blast>,
    pub pickups: Vec<PickupView>,
    pub audio_events: Vec<AudioEvent>,
}

/// A live projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec2,
    pub target: Vec2,
    pub tag: u8,
}

impl From<&Projectile> for ProjectileView {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id.0,
            position: p.position,
            target: p.target,
            tag: p.tag,
        }
    }
}

/// A live interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u32,
    pub origin: Vec2,
    pub position: Vec2,
    pub target: Vec2,
    pub emplacement: usize,
    /// Identity of the projectile being tracked, if the lock is still held.
    pub tracking: Option<u32>,
}

impl From<&Interceptor> for InterceptorView {
    fn from(i: &Interceptor) -> Self {
        Self {
            id: i.id.0,
            origin: i.origin,
            position: i.position,
            target: i.target,
            emplacement: i.emplacement,
            tracking: i.tracking.map(|t| t.0),
        }
    }
}

/// A live pickup with its remaining lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u32,
    pub position: Vec2,
    pub kind: PickupKind,
    pub remaining_secs: f64,
}

impl PickupView {
    pub fn new(pickup: &Pickup, now_secs: f64) -> Self {
        Self {
            id: pickup.id.0,
            position: pickup.position,
            kind: pickup.kind,
            remaining_secs: (pickup.created_at_secs + pickup.lifespan_secs - now_secs).max(0.0),
        }
    }
}

/// Running session statistics for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsView {
    pub projectiles_spawned: u32,
    pub projectiles_destroyed: u32,
    pub impacts: u32,
    pub interceptors_launched: u32,
    pub pickups_collected: u32,
}
