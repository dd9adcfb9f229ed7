//! Commands sent from the input and session-control layers to the simulation.
//!
//! Commands are applied between ticks, never in the middle of one.

use serde::{Deserialize, Serialize};

/// All possible player and session actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire at a point in logical play-space.
    Fire { x: f32, y: f32 },
    /// Begin a session from not-started, lost or won.
    Start,
    /// Discard the current session and begin a fresh one.
    Reset,
    /// Freeze the frame driver.
    Pause,
    /// Unfreeze the frame driver.
    Resume,
}
