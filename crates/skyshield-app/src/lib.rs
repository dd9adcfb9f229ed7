//! Skyshield headless host.
//!
//! Runs the simulation engine on its own thread at the nominal tick rate and
//! exposes it through a command channel and a polled snapshot. The bundled
//! autopilot plays the game so the binary can run unattended.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use skyshield_core as core;
