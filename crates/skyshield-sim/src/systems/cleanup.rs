//! Cleanup system: removes pickups that outlived their lifespan.

use hecs::Entity;
use log::trace;

use skyshield_core::components::Pickup;

use crate::session::Session;

/// Despawn expired pickups. Uses the shared buffer to avoid per-tick allocation.
pub fn run(session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    let now = session.time.elapsed_secs;
    for (entity, pickup) in session.world.query_mut::<&Pickup>() {
        if now - pickup.created_at_secs >= pickup.lifespan_secs {
            trace!("pickup {} expired", pickup.id);
            despawn_buffer.push(entity);
        }
    }
    super::flush_despawns(&mut session.world, despawn_buffer);
}
