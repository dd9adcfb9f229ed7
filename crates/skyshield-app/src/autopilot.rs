//! Autopilot: plays the game by firing at the most urgent projectile.

use skyshield_core::commands::PlayerCommand;
use skyshield_core::constants::FIRE_LINE_Y;
use skyshield_core::enums::GameStatus;
use skyshield_core::state::{GameStateSnapshot, ProjectileView};

/// Fires at the lowest projectile above the ground band every few ticks.
#[derive(Debug, Clone)]
pub struct Autopilot {
    fire_every: u64,
    last_fire_tick: Option<u64>,
}

impl Autopilot {
    pub fn new(fire_every: u32) -> Self {
        Self {
            fire_every: u64::from(fire_every.max(1)),
            last_fire_tick: None,
        }
    }

    /// Decide the command for this snapshot, if any.
    pub fn next_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.status != GameStatus::Running || snapshot.paused {
            return None;
        }
        let tick = snapshot.time.tick;
        if let Some(last) = self.last_fire_tick {
            if tick < last + self.fire_every {
                return None;
            }
        }

        let target = lowest_projectile(&snapshot.projectiles)?;
        self.last_fire_tick = Some(tick);
        Some(PlayerCommand::Fire {
            x: target.position.x,
            y: target.position.y,
        })
    }
}

/// The projectile closest to the ground that can still be fired at.
pub fn lowest_projectile(projectiles: &[ProjectileView]) -> Option<&ProjectileView> {
    projectiles
        .iter()
        .filter(|p| p.position.y <= FIRE_LINE_Y)
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
}
