//! Host state shared between the controlling thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::{info, warn};
use thiserror::Error;

use skyshield_core::commands::PlayerCommand;
use skyshield_core::state::GameStateSnapshot;
use skyshield_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("host state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread")]
    Spawn(#[from] std::io::Error),
}

struct LoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<()>,
}

/// Shared host state.
///
/// The latest snapshot is behind `Arc<Mutex<_>>` because the game loop
/// thread writes it after every tick.
#[derive(Default)]
pub struct AppState {
    game_loop: Mutex<Option<LoopHandle>>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread with the given configuration.
    pub fn start_simulation(&self, config: SimConfig) -> Result<(), HostError> {
        let mut slot = self.game_loop.lock().map_err(|_| HostError::Poisoned)?;
        if slot.is_some() {
            return Err(HostError::AlreadyRunning);
        }

        let (command_tx, thread) =
            game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot))?;
        *slot = Some(LoopHandle { command_tx, thread });
        info!("game loop started");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.game_loop
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Forward a player command to the engine.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), HostError> {
        let slot = self.game_loop.lock().map_err(|_| HostError::Poisoned)?;
        let handle = slot.as_ref().ok_or(HostError::NotStarted)?;
        handle
            .command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| HostError::ChannelClosed)
    }

    /// The most recent snapshot, if the loop has ticked at least once.
    pub fn latest_snapshot(&self) -> Result<Option<GameStateSnapshot>, HostError> {
        let lock = self.latest_snapshot.lock().map_err(|_| HostError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the game loop and wait for its thread. Returns the final snapshot.
    pub fn shutdown(&self) -> Result<Option<GameStateSnapshot>, HostError> {
        let handle = self
            .game_loop
            .lock()
            .map_err(|_| HostError::Poisoned)?
            .take()
            .ok_or(HostError::NotStarted)?;

        if handle.command_tx.send(GameLoopCommand::Shutdown).is_err() {
            warn!("game loop already gone before shutdown");
        }
        handle.thread.join().map_err(|_| HostError::LoopPanicked)?;
        info!("game loop stopped");
        self.latest_snapshot()
    }
}
