//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::warn;

use strafe_core::commands::SimCommand;
use strafe_core::input::FrameInput;
use strafe_core::state::FrameSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Latest sampled input; held until the next one arrives.
    Input(FrameInput),
    /// A match command to forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Handle to a running game loop.
pub struct AppState {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward sampled input. Returns `false` once the loop has stopped.
    pub fn send_input(&self, input: FrameInput) -> bool {
        self.command_tx.send(GameLoopCommand::Input(input)).is_ok()
    }

    pub fn send_command(&self, command: SimCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Sim(command)).is_ok()
    }

    /// Clone of the most recent snapshot, if a tick has run yet.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("game loop thread panicked");
            }
        }
    }
}
