//! Events emitted by the simulation for audio and visual feedback.
//!
//! The core never waits on these; they are drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::PickupKind;

/// Discrete feedback events for the sound layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A projectile was destroyed by a blast.
    Score { x: f32, y: f32, points: u32 },
    /// A projectile reached the ground.
    Impact { x: f32, y: f32 },
    /// The session transitioned to a terminal status.
    SessionEnd { score: u32 },
    /// A blast consumed a pickup.
    PickupCollected { kind: PickupKind },
}
