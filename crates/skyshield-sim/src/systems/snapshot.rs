//! Snapshot system: builds a complete GameStateSnapshot from the session.
//!
//! This system is read-only. Entity lists are ordered by identity so the
//! renderer sees a stable draw order.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::events::AudioEvent;
use skyshield_core::state::*;

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current session.
pub fn build_snapshot(
    session: &Session,
    paused: bool,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let now = session.time.elapsed_secs;
    GameStateSnapshot {
        time: session.time,
        status: session.status,
        paused,
        score: session.score.points,
        stats: session.score.stats(),
        slow_time_remaining_secs: session.slow_time_remaining_secs(),
        emplacements: session.emplacements.to_vec(),
        structures: session.structures.to_vec(),
        projectiles: build_projectiles(&session.world),
        interceptors: build_interceptors(&session.world),
        blasts: build_blasts(&session.world),
        pickups: build_pickups(&session.world, now),
        audio_events,
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| ProjectileView::from(p))
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut views: Vec<InterceptorView> = world
        .query::<&Interceptor>()
        .iter()
        .map(|(_, i)| InterceptorView::from(i))
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_blasts(world: &World) -> Vec<Blast> {
    let mut blasts: Vec<Blast> = world.query::<&Blast>().iter().map(|(_, b)| *b).collect();
    blasts.sort_by_key(|b| b.id);
    blasts
}

fn build_pickups(world: &World, now_secs: f64) -> Vec<PickupView> {
    let mut views: Vec<PickupView> = world
        .query::<&Pickup>()
        .iter()
        .map(|(_, p)| PickupView::new(p, now_secs))
        .collect();
    views.sort_by_key(|v| v.id);
    views
}
