//! Collision resolver: blasts against projectiles and pickups.
//!
//! Tests are center-point-in-circle only. Every projectile and pickup is
//! considered once per pass, so nothing is destroyed or consumed twice even
//! when several blasts overlap it.

use glam::Vec2;
use hecs::Entity;
use log::debug;

use skyshield_core::components::{Blast, Pickup, Projectile};
use skyshield_core::config::Tuning;
use skyshield_core::constants::SCORE_PER_KILL;
use skyshield_core::enums::PickupKind;
use skyshield_core::events::AudioEvent;

use crate::session::Session;

/// Whether `point` lies strictly inside any of the blast circles.
pub fn inside_any(blasts: &[(Vec2, f32)], point: Vec2) -> bool {
    blasts
        .iter()
        .any(|&(center, radius)| center.distance(point) < radius)
}

/// Run the collision pass.
pub fn run(
    session: &mut Session,
    tuning: &Tuning,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let blasts: Vec<(Vec2, f32)> = session
        .world
        .query::<&Blast>()
        .iter()
        .filter(|(_, b)| b.radius > 0.0)
        .map(|(_, b)| (b.center, b.radius))
        .collect();
    if blasts.is_empty() {
        return;
    }

    // Projectiles
    let mut kills: Vec<Vec2> = Vec::new();
    for (entity, projectile) in session.world.query::<&Projectile>().iter() {
        if inside_any(&blasts, projectile.position) {
            kills.push(projectile.position);
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);

    for point in kills {
        session.score.award(SCORE_PER_KILL);
        session.score.projectiles_destroyed += 1;
        audio_events.push(AudioEvent::Score {
            x: point.x,
            y: point.y,
            points: SCORE_PER_KILL,
        });
    }

    // Pickups
    let mut collected: Vec<PickupKind> = Vec::new();
    for (entity, pickup) in session.world.query::<&Pickup>().iter() {
        if inside_any(&blasts, pickup.position) {
            collected.push(pickup.kind);
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);

    for kind in collected {
        apply_pickup(session, kind, tuning);
        session.score.pickups_collected += 1;
        audio_events.push(AudioEvent::PickupCollected { kind });
    }
}

/// Apply a collected pickup's effect to the session.
pub fn apply_pickup(session: &mut Session, kind: PickupKind, tuning: &Tuning) {
    match kind {
        PickupKind::AmmoRefill => {
            for emplacement in session.emplacements.iter_mut().filter(|e| e.active) {
                emplacement.ammo = emplacement.max_ammo;
            }
            debug!("ammo refilled");
        }
        PickupKind::SlowTime => {
            session.trigger_slow_time(tuning.slow_time_secs);
            debug!(
                "slow time until {:.2}s",
                session.slow_time_until.unwrap_or_default()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_strict() {
        let blasts = [(Vec2::new(100.0, 100.0), 10.0)];
        assert!(inside_any(&blasts, Vec2::new(105.0, 100.0)));
        assert!(!inside_any(&blasts, Vec2::new(110.0, 100.0)));
        assert!(!inside_any(&[], Vec2::new(100.0, 100.0)));
    }
}
