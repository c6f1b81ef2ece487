//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use droplet_core::commands::PlayerCommand;
use droplet_core::state::GameStateSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `command_tx` is `None` until a game loop has been spawned
/// - `latest_snapshot` is written by the loop thread after each tick
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, command_tx: mpsc::Sender<GameLoopCommand>) {
        if let Ok(mut lock) = self.command_tx.lock() {
            *lock = Some(command_tx);
        }
    }

    pub fn is_running(&self) -> bool {
        self.command_tx.lock().map(|tx| tx.is_some()).unwrap_or(false)
    }

    /// Forward a command to the loop. False when no loop is attached or it has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    pub fn send_player_command(&self, command: PlayerCommand) -> bool {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the loop to stop and detach from it.
    pub fn shutdown(&self) {
        if let Ok(mut lock) = self.command_tx.lock() {
            if let Some(tx) = lock.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
