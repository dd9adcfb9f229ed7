//! Targeting and dispatch: turns one fire command into interceptors.
//!
//! The emplacement nearest the fire point (by x) among those able to pay for
//! a shot does the firing. Each weapon kind launches differently:
//! - Area: one slow interceptor, large blast, costs 10.
//! - Tracking: one fast interceptor per locked projectile (up to 2),
//!   costs 1 each; falls back to a single unguided shot.
//! - Wide: one interceptor, medium blast, costs 1.

use std::cmp::Ordering;

use glam::Vec2;
use log::debug;

use skyshield_core::components::{Emplacement, Projectile};
use skyshield_core::config::Tuning;
use skyshield_core::constants::*;
use skyshield_core::enums::WeaponKind;
use skyshield_core::types::EntityId;

use crate::session::Session;
use crate::world_setup;

/// Whether an emplacement can pay for one shot right now.
pub fn can_fire(emplacement: &Emplacement) -> bool {
    emplacement.active && emplacement.ammo >= emplacement.weapon.shot_cost()
}

/// Index of the eligible emplacement closest to `x`.
/// Ties go to the first in left-to-right order.
pub fn select_emplacement(emplacements: &[Emplacement], x: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, emplacement) in emplacements.iter().enumerate() {
        if !can_fire(emplacement) {
            continue;
        }
        let distance = (emplacement.position.x - x).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Up to `max` live projectiles nearest `point`, closest first.
pub fn nearest_projectiles(session: &Session, point: Vec2, max: usize) -> Vec<(EntityId, Vec2)> {
    let mut candidates: Vec<(EntityId, Vec2, f32)> = session
        .world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| (p.id, p.position, p.position.distance_squared(point)))
        .collect();
    candidates.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));
    candidates
        .into_iter()
        .take(max)
        .map(|(id, position, _)| (id, position))
        .collect()
}

/// Handle one fire command. Returns the number of interceptors launched.
///
/// Points inside the ground band and commands with no eligible emplacement
/// are ignored, as are points that are not finite.
pub fn fire(session: &mut Session, point: Vec2, tuning: &Tuning) -> u32 {
    if !point.is_finite() {
        debug!("fire at {point} ignored: not a finite point");
        return 0;
    }
    if point.y > FIRE_LINE_Y {
        debug!("fire at ({:.0}, {:.0}) ignored: inside ground band", point.x, point.y);
        return 0;
    }

    let Some(idx) = select_emplacement(&session.emplacements, point.x) else {
        debug!("fire at ({:.0}, {:.0}) ignored: no eligible emplacement", point.x, point.y);
        return 0;
    };

    let weapon = session.emplacements[idx].weapon;
    let origin = session.emplacements[idx].position;
    let base_speed = tuning.interceptor_speed;

    let launched = match weapon {
        WeaponKind::Area => {
            session.emplacements[idx].ammo -= weapon.shot_cost();
            world_setup::spawn_interceptor(
                &mut session.world,
                &mut session.ids,
                idx,
                origin,
                point,
                base_speed * AREA_SPEED_FACTOR,
                weapon.blast_radius(),
                None,
            );
            1
        }
        WeaponKind::Tracking => {
            let affordable = (session.emplacements[idx].ammo / weapon.shot_cost()) as usize;
            let locks = nearest_projectiles(session, point, TRACKING_MAX_LOCKS.min(affordable));
            if locks.is_empty() {
                session.emplacements[idx].ammo -= weapon.shot_cost();
                world_setup::spawn_interceptor(
                    &mut session.world,
                    &mut session.ids,
                    idx,
                    origin,
                    point,
                    base_speed,
                    weapon.blast_radius(),
                    None,
                );
                1
            } else {
                session.emplacements[idx].ammo -= weapon.shot_cost() * locks.len() as u32;
                for &(target_id, target) in &locks {
                    world_setup::spawn_interceptor(
                        &mut session.world,
                        &mut session.ids,
                        idx,
                        origin,
                        target,
                        base_speed * TRACKING_SPEED_FACTOR,
                        weapon.blast_radius(),
                        Some(target_id),
                    );
                }
                locks.len() as u32
            }
        }
        WeaponKind::Wide => {
            session.emplacements[idx].ammo -= weapon.shot_cost();
            world_setup::spawn_interceptor(
                &mut session.world,
                &mut session.ids,
                idx,
                origin,
                point,
                base_speed,
                weapon.blast_radius(),
                None,
            );
            1
        }
    };

    session.score.interceptors_launched += launched;
    debug!(
        "{weapon:?} emplacement {idx} launched {launched} at ({:.0}, {:.0}), ammo left {}",
        point.x, point.y, session.emplacements[idx].ammo
    );
    launched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::initial_emplacements;

    #[test]
    fn selects_closest_by_x() {
        let emplacements = initial_emplacements();
        assert_eq!(select_emplacement(&emplacements, 10.0), Some(0));
        assert_eq!(select_emplacement(&emplacements, 380.0), Some(1));
        assert_eq!(select_emplacement(&emplacements, 790.0), Some(2));
    }

    #[test]
    fn tie_goes_to_leftmost() {
        let emplacements = initial_emplacements();
        // Exactly halfway between left (50) and center (400).
        assert_eq!(select_emplacement(&emplacements, 225.0), Some(0));
    }

    #[test]
    fn skips_inactive_and_underfunded() {
        let mut emplacements = initial_emplacements();
        emplacements[0].ammo = 9;
        assert_eq!(select_emplacement(&emplacements, 10.0), Some(1));

        emplacements[1].active = false;
        assert_eq!(select_emplacement(&emplacements, 10.0), Some(2));

        emplacements[2].ammo = 0;
        assert_eq!(select_emplacement(&emplacements, 10.0), None);
    }
}
