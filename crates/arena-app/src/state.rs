//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use arena_core::commands::PlayerCommand;
use arena_core::state::{GameStateSnapshot, ScoreView};

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// A raw key transition, by key name (`"w"`, `"ArrowUp"`, `"Escape"`, ...).
    Key { key: String, pressed: bool },
    /// Stop the loop and return its summary.
    Shutdown,
}

/// What a finished session looked like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Unpaused ticks the simulation ran.
    pub ticks: u64,
    /// Frames the loop produced, paused ones included.
    pub frames: u64,
    pub score: ScoreView,
}

/// Handles the host keeps while the loop runs.
///
/// - `command_tx` is wrapped in a `Mutex` so the state can be shared across threads.
/// - `latest_snapshot` is written by the loop after every frame.
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a message to the loop. Returns false if the loop is not
    /// running or has already hung up.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        if !self.is_running() {
            return false;
        }
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|r| *r).unwrap_or(false)
    }

    /// Convenience for a key press or release.
    pub fn key(&self, key: &str, pressed: bool) -> bool {
        self.send(GameLoopCommand::Key {
            key: key.to_string(),
            pressed,
        })
    }

    /// Clone of the most recent snapshot, if the loop produced one.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
