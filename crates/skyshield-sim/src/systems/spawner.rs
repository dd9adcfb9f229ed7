//! Spawner: decides when and where projectiles and pickups appear.

use glam::Vec2;
use log::trace;
use rand::Rng;

use skyshield_core::config::Tuning;
use skyshield_core::constants::*;
use skyshield_core::enums::PickupKind;

use crate::session::Session;
use crate::world_setup;

/// Milliseconds between spawn ticks at the given score.
///
/// Shrinks linearly with score until the ramp cap, never below the minimum.
pub fn spawn_interval_ms(score: u32, tuning: &Tuning) -> f64 {
    let ramp = score.min(tuning.spawn_score_ramp_cap) as f64;
    (tuning.spawn_interval_base_ms - ramp).max(tuning.spawn_interval_min_ms)
}

/// Run one spawner pass. Does nothing until the current interval has elapsed.
pub fn run(session: &mut Session, rng: &mut impl Rng, tuning: &Tuning) {
    let now_ms = session.time.elapsed_ms();
    let interval = spawn_interval_ms(session.score.points, tuning);
    if now_ms - session.spawn_clock.last_spawn_ms < interval {
        return;
    }
    session.spawn_clock.last_spawn_ms = now_ms;

    spawn_projectile(session, rng, tuning);

    if rng.gen_bool(tuning.pickup_chance.clamp(0.0, 1.0)) {
        spawn_pickup(session, rng, tuning);
    }
}

/// Spawn one projectile aimed at a random active structure or emplacement.
/// Skipped when nothing is left to aim at.
fn spawn_projectile(session: &mut Session, rng: &mut impl Rng, tuning: &Tuning) {
    let targets: Vec<Vec2> = session
        .structures
        .iter()
        .filter(|s| s.active)
        .map(|s| s.position)
        .chain(
            session
                .emplacements
                .iter()
                .filter(|e| e.active)
                .map(|e| e.position),
        )
        .collect();

    if targets.is_empty() {
        trace!("spawn skipped: no active targets");
        return;
    }

    let target = targets[rng.gen_range(0..targets.len())];
    let origin = Vec2::new(rng.gen_range(0.0..WORLD_WIDTH), 0.0);
    let speed = if tuning.projectile_speed_max > tuning.projectile_speed_min {
        rng.gen_range(tuning.projectile_speed_min..=tuning.projectile_speed_max)
    } else {
        tuning.projectile_speed_min
    };
    let tag = rng.gen_range(0..PROJECTILE_TAG_COUNT);

    let id = world_setup::spawn_projectile(
        &mut session.world,
        &mut session.ids,
        origin,
        target,
        speed,
        tag,
    );
    session.score.projectiles_spawned += 1;
    trace!("spawned projectile {id} toward ({:.0}, {:.0})", target.x, target.y);
}

fn spawn_pickup(session: &mut Session, rng: &mut impl Rng, tuning: &Tuning) {
    let position = Vec2::new(
        rng.gen_range(PICKUP_MIN_X..PICKUP_MAX_X),
        rng.gen_range(PICKUP_MIN_Y..PICKUP_MAX_Y),
    );
    let kind = if rng.gen_bool(0.5) {
        PickupKind::AmmoRefill
    } else {
        PickupKind::SlowTime
    };
    world_setup::spawn_pickup(
        &mut session.world,
        &mut session.ids,
        position,
        kind,
        session.time.elapsed_secs,
        tuning.pickup_lifespan_secs,
    );
    trace!("spawned {kind:?} pickup");
}
