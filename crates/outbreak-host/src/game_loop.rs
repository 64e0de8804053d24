//! Game loop thread: runs the simulation engine at the display rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via `mpsc` channel. Snapshots go to a `SnapshotSink` and are
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use outbreak_core::constants::FRAME_RATE;
use outbreak_core::state::GameStateSnapshot;
use outbreak_core::storage::HighScoreStore;
use outbreak_sim::engine::{SimConfig, SimulationEngine};

use crate::audio::{AudioOutput, AudioPlayer};
use crate::clock::FrameClock;
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Builds the high-score store for each new engine.
pub type StoreFactory = Box<dyn Fn() -> Box<dyn HighScoreStore> + Send>;

/// Receiver of every frame's snapshot (renderer, audio, recorder).
pub trait SnapshotSink {
    fn publish(&mut self, snapshot: &GameStateSnapshot);
}

impl SnapshotSink for mpsc::Sender<GameStateSnapshot> {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        // Receiver gone just means nobody is watching anymore.
        let _ = self.send(snapshot.clone());
    }
}

impl<O: AudioOutput> SnapshotSink for AudioPlayer<O> {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        self.play_all(&snapshot.audio_events);
    }
}

/// One engine plus what is needed to replace it on restart.
struct Session {
    config: SimConfig,
    make_store: StoreFactory,
    engine: SimulationEngine,
}

impl Session {
    fn new(config: SimConfig, make_store: StoreFactory) -> Self {
        let engine = SimulationEngine::with_store(config.clone(), make_store());
        Self {
            config,
            make_store,
            engine,
        }
    }

    fn restart(&mut self) {
        log::info!("restarting session with seed {}", self.config.seed);
        self.engine = SimulationEngine::with_store(self.config.clone(), (self.make_store)());
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the front end to use and the thread
/// handle to join after `Shutdown`.
pub fn spawn_game_loop<S>(
    config: SimConfig,
    make_store: StoreFactory,
    sink: S,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>)
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("outbreak-game-loop".into())
        .spawn(move || {
            let session = Session::new(config, make_store);
            run_game_loop(session, sink, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: SnapshotSink>(
    mut session: Session,
    mut sink: S,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut clock = FrameClock::new();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => session.engine.queue_input(event),
                Ok(GameLoopCommand::Restart) => {
                    session.restart();
                    clock.reset();
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down after {} frames", clock.frame_count);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame by the measured wall time
        let dt = clock.begin_frame();
        let snapshot = session.engine.tick(dt);

        // 3. Hand the frame to the sink
        sink.publish(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}
