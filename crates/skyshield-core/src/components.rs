//! Entity records.
//!
//! Components are plain data structs with no behavior. Moving entities
//! (projectiles, interceptors, blasts, pickups) live in the hecs world;
//! emplacements and structures are fixed arrays owned by the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Enemy object descending toward a structure or emplacement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub origin: Vec2,
    pub position: Vec2,
    pub target: Vec2,
    /// Distance covered per tick at normal time.
    pub speed: f32,
    /// Renderer sprite variant.
    pub tag: u8,
}

/// Player-launched object that detonates into a blast at its target point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: EntityId,
    pub origin: Vec2,
    pub position: Vec2,
    /// Last resolved target point.
    pub target: Vec2,
    pub speed: f32,
    /// Index of the launching emplacement (0 = left, 1 = center, 2 = right).
    pub emplacement: usize,
    /// Maximum radius of the blast left on arrival.
    pub blast_radius: f32,
    /// Projectile this interceptor homes on. Resolved by identity each tick.
    pub tracking: Option<EntityId>,
}

/// Expanding-then-fading region that destroys projectiles and collects pickups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    pub id: EntityId,
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub phase: BlastPhase,
}

/// Time-limited bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub id: EntityId,
    pub position: Vec2,
    pub kind: PickupKind,
    /// Simulation time at creation (seconds).
    pub created_at_secs: f64,
    pub lifespan_secs: f64,
}

/// Player launch site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emplacement {
    pub weapon: WeaponKind,
    pub position: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Once false, stays false for the rest of the session.
    pub active: bool,
}

/// Passive defended asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub position: Vec2,
    pub active: bool,
}
