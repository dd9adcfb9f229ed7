//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Top-level session status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    /// All emplacements were inactive at the end of a tick.
    Lost,
    /// Reserved. No victory condition exists in the shipped configuration.
    Won,
}

impl GameStatus {
    /// Whether a `Start` command may begin a new session from this status.
    pub fn can_start(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Firing behavior of an emplacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Left emplacement: slow, expensive, large blast.
    Area,
    /// Center emplacement: fast interceptors that lock onto projectiles.
    Tracking,
    /// Right emplacement: cheap, medium blast.
    Wide,
}

impl WeaponKind {
    /// Ammunition consumed per shot (per interceptor for tracking salvos).
    pub fn shot_cost(self) -> u32 {
        match self {
            WeaponKind::Area => AREA_SHOT_COST,
            WeaponKind::Tracking => TRACKING_SHOT_COST,
            WeaponKind::Wide => WIDE_SHOT_COST,
        }
    }

    pub fn capacity(self) -> u32 {
        match self {
            WeaponKind::Area => AREA_CAPACITY,
            WeaponKind::Tracking => TRACKING_CAPACITY,
            WeaponKind::Wide => WIDE_CAPACITY,
        }
    }

    /// Maximum radius of the blast an interceptor of this kind leaves behind.
    pub fn blast_radius(self) -> f32 {
        match self {
            WeaponKind::Area => BLAST_RADIUS_AREA,
            WeaponKind::Tracking => BLAST_RADIUS_BASELINE,
            WeaponKind::Wide => BLAST_RADIUS_WIDE,
        }
    }
}

/// Effect granted by a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Restores every active emplacement to capacity.
    AmmoRefill,
    /// Slows projectile movement for a fixed window.
    SlowTime,
}

/// Blast lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastPhase {
    #[default]
    Growing,
    Fading,
}
