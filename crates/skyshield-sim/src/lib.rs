//! Simulation engine for SKYSHIELD.
//!
//! Owns the session (entity pools, score, status), runs systems once per
//! frame, and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyshield_core as core;
