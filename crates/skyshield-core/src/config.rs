//! Runtime-tunable simulation parameters.
//!
//! Defaults mirror `constants`. A host may override any subset from JSON;
//! missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Rejected tuning values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("projectile speed range [{min}, {max}] must be positive and ordered")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("minimum spawn interval {min_ms}ms exceeds base interval {base_ms}ms")]
    InvertedSpawnInterval { min_ms: f64, base_ms: f64 },
    #[error("pickup chance {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub spawn_interval_base_ms: f64,
    pub spawn_interval_min_ms: f64,
    pub spawn_score_ramp_cap: u32,
    pub projectile_speed_min: f32,
    pub projectile_speed_max: f32,
    pub interceptor_speed: f32,
    pub pickup_chance: f64,
    pub pickup_lifespan_secs: f64,
    pub slow_time_secs: f64,
    pub slow_time_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_base_ms: SPAWN_INTERVAL_BASE_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            spawn_score_ramp_cap: SPAWN_SCORE_RAMP_CAP,
            projectile_speed_min: PROJECTILE_SPEED_MIN,
            projectile_speed_max: PROJECTILE_SPEED_MAX,
            interceptor_speed: INTERCEPTOR_SPEED,
            pickup_chance: PICKUP_CHANCE,
            pickup_lifespan_secs: PICKUP_LIFESPAN_SECS,
            slow_time_secs: SLOW_TIME_SECS,
            slow_time_factor: SLOW_TIME_FACTOR,
        }
    }
}

impl Tuning {
    /// Check that every value keeps the simulation well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.projectile_speed_min > 0.0 && self.projectile_speed_min <= self.projectile_speed_max)
        {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.projectile_speed_min,
                max: self.projectile_speed_max,
            });
        }
        positive("interceptor_speed", self.interceptor_speed as f64)?;
        positive("spawn_interval_min_ms", self.spawn_interval_min_ms)?;
        positive("pickup_lifespan_secs", self.pickup_lifespan_secs)?;
        positive("slow_time_secs", self.slow_time_secs)?;
        positive("slow_time_factor", self.slow_time_factor as f64)?;
        if self.spawn_interval_min_ms > self.spawn_interval_base_ms {
            return Err(ConfigError::InvertedSpawnInterval {
                min_ms: self.spawn_interval_min_ms,
                base_ms: self.spawn_interval_base_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.pickup_chance) {
            return Err(ConfigError::InvalidProbability(self.pickup_chance));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // Written so NaN is rejected as well.
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
