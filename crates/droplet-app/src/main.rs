use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use droplet_app::autopilot;
use droplet_app::cli::{CliError, Options};
use droplet_app::game_loop::spawn_game_loop;
use droplet_app::state::AppState;
use droplet_core::commands::PlayerCommand;
use droplet_core::enums::GamePhase;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "droplet failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let options = Options::parse(std::env::args().skip(1))?;
    let config = options.loop_config()?;
    tracing::info!(
        seed = config.sim.seed,
        seconds = options.seconds,
        unpaced = options.unpaced,
        "starting headless run"
    );

    let state = AppState::new();
    let (command_tx, snapshots) = spawn_game_loop(config, Arc::clone(&state.latest_snapshot))?;
    state.attach(command_tx);
    state.send_player_command(PlayerCommand::StartRun);

    let mut died = false;
    for snapshot in snapshots.iter() {
        if snapshot.phase == GamePhase::GameOver {
            died = true;
            break;
        }
        if snapshot.time.elapsed_secs >= options.seconds {
            break;
        }
        for command in autopilot::respond(&snapshot) {
            state.send_player_command(command);
        }
    }
    state.shutdown();

    let Some(last) = state.latest() else {
        tracing::warn!("no ticks ran");
        return Ok(());
    };
    tracing::info!(
        outcome = if died { "died" } else { "survived" },
        survived_secs = last.score.survival_secs,
        wave = last.wave.wave_number,
        level = last.player.stats.level,
        kills = last.score.enemies_killed,
        experience = last.score.total_experience,
        weapons = last.weapons.len(),
        "run finished"
    );
    Ok(())
}
