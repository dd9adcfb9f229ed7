//! Entity factories and the fixed session layout.
//!
//! Builds the three emplacements and six structures, and spawns moving
//! entities into the hecs world with fresh identities.

use glam::Vec2;
use hecs::World;

use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::types::{EntityId, EntityIdAllocator};

/// Weapon of each emplacement slot, left to right.
pub const EMPLACEMENT_WEAPONS: [WeaponKind; EMPLACEMENT_COUNT] =
    [WeaponKind::Area, WeaponKind::Tracking, WeaponKind::Wide];

/// Left, center and right emplacements at full capacity.
pub fn initial_emplacements() -> [Emplacement; EMPLACEMENT_COUNT] {
    std::array::from_fn(|i| {
        let weapon = EMPLACEMENT_WEAPONS[i];
        Emplacement {
            weapon,
            position: Vec2::new(EMPLACEMENT_X[i], GROUND_Y),
            ammo: weapon.capacity(),
            max_ammo: weapon.capacity(),
            active: true,
        }
    })
}

/// Six intact structures along the ground line.
pub fn initial_structures() -> [Structure; STRUCTURE_COUNT] {
    std::array::from_fn(|i| Structure {
        position: Vec2::new(STRUCTURE_X[i], GROUND_Y),
        active: true,
    })
}

/// Spawn a projectile at `origin` heading for `target`.
pub fn spawn_projectile(
    world: &mut World,
    ids: &mut EntityIdAllocator,
    origin: Vec2,
    target: Vec2,
    speed: f32,
    tag: u8,
) -> EntityId {
    let id = ids.allocate();
    world.spawn((Projectile {
        id,
        origin,
        position: origin,
        target,
        speed,
        tag,
    },));
    id
}

/// Spawn an interceptor leaving `origin` for `target`.
#[allow(clippy::too_many_arguments)]
pub fn spawn_interceptor(
    world: &mut World,
    ids: &mut EntityIdAllocator,
    emplacement: usize,
    origin: Vec2,
    target: Vec2,
    speed: f32,
    blast_radius: f32,
    tracking: Option<EntityId>,
) -> EntityId {
    let id = ids.allocate();
    world.spawn((Interceptor {
        id,
        origin,
        position: origin,
        target,
        speed,
        emplacement,
        blast_radius,
        tracking,
    },));
    id
}

/// Spawn a blast at zero radius, growing toward `max_radius`.
pub fn spawn_blast(
    world: &mut World,
    ids: &mut EntityIdAllocator,
    center: Vec2,
    max_radius: f32,
) -> EntityId {
    let id = ids.allocate();
    world.spawn((Blast {
        id,
        center,
        radius: 0.0,
        max_radius,
        phase: BlastPhase::Growing,
    },));
    id
}

/// Spawn a pickup created at `now_secs`.
pub fn spawn_pickup(
    world: &mut World,
    ids: &mut EntityIdAllocator,
    position: Vec2,
    kind: PickupKind,
    now_secs: f64,
    lifespan_secs: f64,
) -> EntityId {
    let id = ids.allocate();
    world.spawn((Pickup {
        id,
        position,
        kind,
        created_at_secs: now_secs,
        lifespan_secs,
    },));
    id
}
