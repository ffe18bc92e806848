//! Game loop thread: runs the simulation engine once per display refresh.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Input and match commands arrive via `mpsc` channel. Every snapshot goes to
//! a `FrameSink` and is stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use strafe_core::constants::REFRESH_RATE;
use strafe_core::input::{FrameInput, InputAction};
use strafe_core::state::FrameSnapshot;
use strafe_sim::{SimConfig, SimulationEngine};

use crate::state::{AppState, GameLoopCommand, SharedSnapshot};

/// Wall-clock duration of one refresh.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / REFRESH_RATE as u64);

/// Receives every frame the loop produces.
pub trait FrameSink: Send + 'static {
    fn publish(&mut self, snapshot: &FrameSnapshot);
}

/// Spawns the game loop in a new thread and returns a handle to it.
pub fn spawn_game_loop<S: FrameSink>(config: SimConfig, sink: S) -> io::Result<AppState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("strafe-game-loop".into())
        .spawn(move || {
            run_game_loop(config, sink, cmd_rx, &shared);
        })?;

    Ok(AppState::new(cmd_tx, latest_snapshot, thread))
}

/// Outcome of draining the command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    Continue,
    Stop,
}

/// Input accumulated between two ticks.
///
/// Held actions follow the latest frame. A `launch-missile` press seen in any
/// frame stays latched until a tick consumes it, so a tap released before the
/// next tick still reaches the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingInput {
    latest: FrameInput,
    missile_latched: bool,
}

impl PendingInput {
    pub fn receive(&mut self, frame: FrameInput) {
        self.latest.held = frame.held;
        if frame.view_direction.is_some() {
            self.latest.view_direction = frame.view_direction;
        }
        if frame.held.is_held(InputAction::LaunchMissile) {
            self.missile_latched = true;
        }
    }

    /// The input the next tick samples.
    pub fn frame(&self) -> FrameInput {
        let mut frame = self.latest;
        if self.missile_latched {
            frame.held.press(InputAction::LaunchMissile);
        }
        frame
    }

    /// Clear one-shot state once a tick has sampled `frame()`.
    pub fn consume(&mut self) {
        self.latest.view_direction = None;
        self.missile_latched = false;
    }
}

/// Apply every pending command. Input frames accumulate into `input`.
pub fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
    input: &mut PendingInput,
) -> Drain {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(frame)) => input.receive(frame),
            Ok(GameLoopCommand::Sim(command)) => {
                debug!(?command, "match command queued");
                engine.queue_command(command);
            }
            Ok(GameLoopCommand::Shutdown) => return Drain::Stop,
            Err(mpsc::TryRecvError::Empty) => return Drain::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return Drain::Stop,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: FrameSink>(
    config: SimConfig,
    mut sink: S,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut input = PendingInput::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if drain_commands(&cmd_rx, &mut engine, &mut input) == Drain::Stop {
            info!(tick = engine.time().tick, "game loop stopped");
            return;
        }

        // 2. Advance one tick (engine handles pause and end of match internally)
        let snapshot = engine.tick(&input.frame());
        input.consume();

        // 3. Hand the frame to the renderer side
        sink.publish(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next refresh
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
