//! Headless OUTBREAK session.
//!
//! Runs the game loop with an autopilot standing in for the player: it
//! locks the pointer, holds the trigger, sweeps the view and restarts after
//! each game over. Useful for soak runs and for checking audio assets.
//! Set `RUST_LOG=debug` to see spawns and playback.

use std::time::{Duration, Instant};

use outbreak_core::commands::{InputEvent, MOUSE_BUTTON_LEFT};
use outbreak_core::state::GameStateSnapshot;
use outbreak_core::storage::HighScoreStore;
use outbreak_host::audio::{AudioBank, AudioPlayer, LogAudioOutput};
use outbreak_host::game_loop::{spawn_game_loop, StoreFactory};
use outbreak_host::settings::HostSettings;
use outbreak_host::state::{AppState, GameLoopCommand};
use outbreak_host::storage::JsonFileHighScoreStore;

const AUTOPILOT_STEP: Duration = Duration::from_millis(50);
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = HostSettings::from_env();
    let data_dir = settings.data_dir.clone();
    let make_store: StoreFactory = Box::new(move || {
        Box::new(JsonFileHighScoreStore::in_dir(&data_dir)) as Box<dyn HighScoreStore>
    });

    let bank = match &settings.audio_dir {
        Some(dir) => AudioBank::load_dir(dir),
        None => AudioBank::new(),
    };
    let audio = AudioPlayer::new(bank, LogAudioOutput::default());

    let state = AppState::new();
    let (cmd_tx, handle) = spawn_game_loop(
        settings.sim_config(),
        make_store,
        audio,
        state.latest_snapshot.clone(),
    );
    if let Ok(mut lock) = state.command_tx.lock() {
        *lock = Some(cmd_tx);
    }

    log::info!(
        "headless session: seed {}, {:.0}s",
        settings.seed,
        settings.session_secs
    );
    run_autopilot(&state, settings.session_duration());

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("game loop thread panicked");
    }
}

fn engage(state: &AppState) {
    state.send(GameLoopCommand::Input(InputEvent::PointerLock { locked: true }));
    state.send(GameLoopCommand::Input(InputEvent::MouseDown {
        button: MOUSE_BUTTON_LEFT,
    }));
}

fn run_autopilot(state: &AppState, duration: Duration) {
    let start = Instant::now();
    let mut last_report = start;
    let mut step: u64 = 0;
    let mut games: u32 = 1;

    engage(state);

    while start.elapsed() < duration {
        std::thread::sleep(AUTOPILOT_STEP);
        step += 1;

        state.send(GameLoopCommand::Input(InputEvent::MouseMove {
            dx: 6.0,
            dy: 0.0,
        }));
        // Strafe back and forth every two seconds.
        if step % 40 == 0 {
            let (press, release) = if (step / 40) % 2 == 0 {
                ("KeyA", "KeyD")
            } else {
                ("KeyD", "KeyA")
            };
            state.send(GameLoopCommand::Input(InputEvent::key_up(release)));
            state.send(GameLoopCommand::Input(InputEvent::key_down(press)));
        }

        let Some(snapshot) = state.snapshot() else {
            continue;
        };

        if last_report.elapsed() >= REPORT_INTERVAL {
            report(games, &snapshot);
            last_report = Instant::now();
        }

        if snapshot.hud.game_over {
            report(games, &snapshot);
            games += 1;
            state.send(GameLoopCommand::Restart);
            engage(state);
            // Let the fresh engine publish before polling again.
            std::thread::sleep(AUTOPILOT_STEP * 2);
        }
    }
}

fn report(game: u32, snapshot: &GameStateSnapshot) {
    let hud = &snapshot.hud;
    log::info!(
        "game {game} t={:.1}s wave {} ({:?}) alive {} health {:.0}/{:.0} score {} high {}{}",
        snapshot.time.elapsed_secs(),
        hud.wave,
        hud.wave_phase,
        hud.alive,
        hud.health,
        hud.max_health,
        hud.score,
        hud.high_score,
        if hud.game_over { " GAME OVER" } else { "" }
    );
}
