//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never has to cross threads.
//! Commands and key events arrive via an `mpsc` channel. Each frame the held
//! keys are sampled into one input vector; the newest snapshot is stored in
//! shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use arena_core::commands::PlayerCommand;
use arena_core::config::ArenaConfig;
use arena_core::constants::{FRAME_MS, TICK_RATE};
use arena_core::input::KeyBindings;
use arena_core::state::GameStateSnapshot;
use arena_sim::clock::{FrameClock, TimeSource, WallClock};
use arena_sim::random::SeededRandom;
use arena_sim::SimulationEngine;

use crate::input::KeyState;
use crate::state::{GameLoopCommand, SessionSummary};

/// Wall-clock duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Frames between status lines (5 seconds).
const STATUS_INTERVAL: u64 = TICK_RATE as u64 * 5;

/// Which clock gates auto-fire cooldowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockMode {
    /// Sum of frame deltas. Deterministic and stops while paused.
    #[default]
    Frame,
    /// Real elapsed time, independent of frame pacing.
    Wall,
}

impl ClockMode {
    fn source(self) -> Box<dyn TimeSource> {
        match self {
            ClockMode::Frame => Box::new(FrameClock::new()),
            ClockMode::Wall => Box::new(WallClock::new()),
        }
    }
}

/// Spawn the game loop on a named thread.
///
/// Returns the sender the host uses to talk to the loop and a handle that
/// yields the session summary once the loop stops.
pub fn spawn_game_loop(
    config: ArenaConfig,
    bindings: KeyBindings,
    clock: ClockMode,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<SessionSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            let rng = Box::new(SeededRandom::new(config.seed));
            let engine = SimulationEngine::with_sources(config, rng, clock.source());
            run_game_loop(engine, KeyState::new(bindings), cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until a Shutdown message or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    mut keys: KeyState,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> SessionSummary {
    info!(rate = TICK_RATE, "game loop started");
    let mut frames = 0u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending messages
        if !drain_commands(&cmd_rx, &mut engine, &mut keys) {
            break;
        }

        // 2. Sample keys and advance one frame
        let snapshot = step_frame(&mut engine, &mut keys);
        frames += 1;
        if frames % STATUS_INTERVAL == 0 {
            info!(
                tick = snapshot.time.tick,
                paused = snapshot.paused,
                hostiles = snapshot.hostiles.len(),
                projectiles = snapshot.projectiles.len(),
                drops = snapshot.drops.len(),
                kills = snapshot.score.kills,
                "status"
            );
        }

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; drop the backlog instead of spiralling.
            warn!(behind_ms = (now - next_tick_time).as_millis() as u64, "game loop fell behind");
            next_tick_time = now;
        }
    }

    let summary = SessionSummary {
        ticks: engine.time().tick,
        frames,
        score: engine.score().clone(),
    };
    info!(ticks = summary.ticks, frames, kills = summary.score.kills, "game loop stopped");
    summary
}

/// Apply every queued message. Returns false when the loop should stop.
pub fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
    keys: &mut KeyState,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Key { key, pressed }) => {
                debug!(%key, pressed, "key");
                keys.set(key, pressed);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// One frame: sample keys, turn a pause press into a toggle, tick the engine.
pub fn step_frame(engine: &mut SimulationEngine, keys: &mut KeyState) -> GameStateSnapshot {
    let input = keys.frame();
    if input.toggle_pause {
        engine.queue_command(PlayerCommand::TogglePause);
    }
    engine.tick(FRAME_MS, input.movement)
}
