//! Physics step: moves projectiles and interceptors, grows and fades blasts,
//! and resolves ground impacts.
//!
//! Order within the step:
//! 1. Projectiles advance; those reaching their target y impact the ground.
//! 2. Interceptors refresh tracked targets from the projectiles' new
//!    positions, then advance; arrivals detonate into blasts.
//! 3. Blasts grow or fade; fully faded blasts are removed.
//! 4. Emplacements that can no longer pay for a shot are deactivated.

use std::collections::HashMap;

use glam::Vec2;
use hecs::Entity;
use log::{debug, trace};

use skyshield_core::components::*;
use skyshield_core::config::Tuning;
use skyshield_core::constants::*;
use skyshield_core::enums::BlastPhase;
use skyshield_core::events::AudioEvent;
use skyshield_core::types::EntityId;

use crate::session::{ScoreState, Session};
use crate::world_setup;

/// Run the full physics step.
pub fn run(
    session: &mut Session,
    tuning: &Tuning,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let speed_factor = if session.slow_time_active() {
        tuning.slow_time_factor
    } else {
        1.0
    };

    move_projectiles(session, speed_factor, audio_events, despawn_buffer);
    move_interceptors(session, despawn_buffer);
    update_blasts(session, despawn_buffer);
    deactivate_depleted(&mut session.emplacements);
}

/// Advance one projectile toward its target. Lands exactly on the target
/// when the remaining distance is within one step.
pub fn advance_projectile(projectile: &mut Projectile, speed_factor: f32) {
    let step = projectile.speed * speed_factor;
    let remaining = projectile.target.distance(projectile.position);
    if remaining <= step {
        projectile.position = projectile.target;
        return;
    }
    let direction = (projectile.target - projectile.origin).normalize_or_zero();
    projectile.position += direction * step;
}

/// Advance one interceptor toward its current target point.
/// Returns true when it arrived this tick and should detonate.
pub fn advance_interceptor(interceptor: &mut Interceptor) -> bool {
    let to_target = interceptor.target - interceptor.position;
    let distance = to_target.length();
    if distance <= interceptor.speed {
        interceptor.position = interceptor.target;
        return true;
    }
    interceptor.position += to_target / distance * interceptor.speed;
    false
}

/// Grow or fade one blast. Returns false once it has faded out.
pub fn update_blast(blast: &mut Blast) -> bool {
    match blast.phase {
        BlastPhase::Growing => {
            blast.radius = (blast.radius + BLAST_GROWTH_RATE).min(blast.max_radius);
            if blast.radius >= blast.max_radius {
                blast.phase = BlastPhase::Fading;
            }
            true
        }
        BlastPhase::Fading => {
            blast.radius = (blast.radius - BLAST_GROWTH_RATE / 2.0).max(0.0);
            blast.radius > 0.0
        }
    }
}

/// Apply ground-impact damage at `point`: every active structure or
/// emplacement within range horizontally is knocked out and penalized.
pub fn apply_impact_damage(
    point: Vec2,
    structures: &mut [Structure],
    emplacements: &mut [Emplacement],
    score: &mut ScoreState,
) {
    for (idx, structure) in structures.iter_mut().enumerate() {
        if structure.active && (structure.position.x - point.x).abs() <= IMPACT_DAMAGE_RANGE {
            structure.active = false;
            score.penalize(STRUCTURE_PENALTY);
            debug!("structure {idx} destroyed");
        }
    }
    for (idx, emplacement) in emplacements.iter_mut().enumerate() {
        if emplacement.active && (emplacement.position.x - point.x).abs() <= IMPACT_DAMAGE_RANGE {
            emplacement.active = false;
            score.penalize(EMPLACEMENT_PENALTY);
            debug!("emplacement {idx} destroyed");
        }
    }
}

/// Deactivate every active emplacement that cannot afford its next shot.
pub fn deactivate_depleted(emplacements: &mut [Emplacement]) {
    for (idx, emplacement) in emplacements.iter_mut().enumerate() {
        if emplacement.active && emplacement.ammo < emplacement.weapon.shot_cost() {
            emplacement.active = false;
            debug!("emplacement {idx} out of ammunition");
        }
    }
}

fn move_projectiles(
    session: &mut Session,
    speed_factor: f32,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut impacts: Vec<Vec2> = Vec::new();
    for (entity, projectile) in session.world.query_mut::<&mut Projectile>() {
        advance_projectile(projectile, speed_factor);
        if projectile.position.y >= projectile.target.y {
            impacts.push(projectile.position);
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);

    for point in impacts {
        world_setup::spawn_blast(&mut session.world, &mut session.ids, point, BLAST_RADIUS_IMPACT);
        apply_impact_damage(
            point,
            &mut session.structures,
            &mut session.emplacements,
            &mut session.score,
        );
        session.score.impacts += 1;
        audio_events.push(AudioEvent::Impact {
            x: point.x,
            y: point.y,
        });
        debug!("ground impact at ({:.0}, {:.0})", point.x, point.y);
    }
}

fn move_interceptors(session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    // Tracking references are resolved fresh against the live pool each tick.
    let live: HashMap<EntityId, Vec2> = session
        .world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| (p.id, p.position))
        .collect();

    let mut detonations: Vec<(Vec2, f32)> = Vec::new();
    for (entity, interceptor) in session.world.query_mut::<&mut Interceptor>() {
        if let Some(tracked) = interceptor.tracking {
            match live.get(&tracked) {
                Some(&position) => interceptor.target = position,
                None => {
                    trace!("interceptor {} lost lock on {tracked}", interceptor.id);
                    interceptor.tracking = None;
                }
            }
        }
        if advance_interceptor(interceptor) {
            detonations.push((interceptor.target, interceptor.blast_radius));
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);

    for (center, max_radius) in detonations {
        world_setup::spawn_blast(&mut session.world, &mut session.ids, center, max_radius);
    }
}

fn update_blasts(session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    for (entity, blast) in session.world.query_mut::<&mut Blast>() {
        if !update_blast(blast) {
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);
}
