//! Game loop thread: runs the simulation engine at the tick rate and emits snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via an `mpsc` channel. Snapshots go out on a second
//! channel and are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use droplet_core::config::SimConfig;
use droplet_core::constants::TICK_RATE;
use droplet_core::state::GameStateSnapshot;
use droplet_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop thread runs.
#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Tick as fast as possible instead of sleeping to each deadline.
    pub unpaced: bool,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the snapshot receiver.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, mpsc::Receiver<GameStateSnapshot>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snap_tx, snap_rx) = mpsc::channel::<GameStateSnapshot>();

    std::thread::Builder::new()
        .name("droplet-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snap_tx, &latest_snapshot);
        })?;

    Ok((cmd_tx, snap_rx))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snap_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config.sim);
    let mut next_tick_time = Instant::now();
    tracing::debug!(unpaced = config.unpaced, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Publish; a dropped receiver just means nobody is listening
        let _ = snap_tx.send(snapshot);

        if config.unpaced {
            continue;
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let effective_tick_duration = scaled_tick_duration(engine.time_scale());
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn scaled_tick_duration(time_scale: f64) -> Duration {
    if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droplet_core::commands::PlayerCommand;
    use droplet_core::enums::GamePhase;

    fn unpaced() -> LoopConfig {
        LoopConfig {
            sim: SimConfig::default(),
            unpaced: true,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartRun)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, rx) = spawn_game_loop(unpaced(), Arc::clone(&latest)).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();

        let active = rx
            .iter()
            .take(1_000)
            .find(|s| s.phase == GamePhase::Active && s.time.tick >= 10)
            .expect("run never became active");
        assert!(active.time.tick >= 10);
        assert!(latest.lock().unwrap().is_some());

        tx.send(GameLoopCommand::Shutdown).unwrap();
        // The sender side of the snapshot channel drops when the thread exits.
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
                _ => assert!(Instant::now() < deadline, "loop did not stop"),
            }
        }
    }

    #[test]
    fn test_loop_stops_when_command_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, rx) = spawn_game_loop(unpaced(), latest).unwrap();
        drop(tx);
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
                _ => assert!(Instant::now() < deadline, "loop did not stop"),
            }
        }
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartRun);

        // Run enough ticks to populate entities
        for _ in 0..600 {
            let snap = engine.tick();
            if snap.phase == GamePhase::UpgradeMenu {
                engine.queue_command(PlayerCommand::ChooseUpgrade { index: 0 });
            }
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_scaling() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
        assert_eq!(scaled_tick_duration(2.0), TICK_DURATION / 2);
        assert_eq!(scaled_tick_duration(0.0), TICK_DURATION);
    }
}
