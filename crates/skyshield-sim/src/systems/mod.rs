//! Systems that operate on the session each tick.
//!
//! Systems are plain functions over `&mut Session` (or `&Session` for
//! read-only work). Entities are never despawned while a query over them is
//! live: removals are collected into a buffer and flushed afterwards.

use hecs::{Entity, World};

pub mod cleanup;
pub mod collision;
pub mod dispatch;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod status;

/// Despawn every buffered entity, leaving the buffer empty.
pub(crate) fn flush_despawns(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
