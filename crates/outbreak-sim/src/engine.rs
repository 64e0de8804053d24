//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the per-session records,
//! folds queued input, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::commands::InputEvent;
use outbreak_core::enums::GamePhase;
use outbreak_core::events::AudioEvent;
use outbreak_core::state::GameStateSnapshot;
use outbreak_core::storage::{HighScoreStore, MemoryHighScoreStore};
use outbreak_core::tuning::Tuning;
use outbreak_core::types::SimTime;

use crate::effects::EffectsState;
use crate::input::InputState;
use crate::player::{PlayerState, Viewpoint};
use crate::score::ScoreState;
use crate::systems;
use crate::systems::scene_sync::SceneTracker;
use crate::wave::WaveController;
use crate::weapons::Armory;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    input_queue: VecDeque<InputEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,

    input: InputState,
    viewpoint: Viewpoint,
    player: PlayerState,
    armory: Armory,
    waves: WaveController,
    score: ScoreState,
    effects: EffectsState,
    scene: SceneTracker,
}

impl SimulationEngine {
    /// Create an engine with a fresh in-memory high-score store.
    pub fn new(config: SimConfig) -> Self {
        Self::with_store(config, Box::new(MemoryHighScoreStore::new()))
    }

    /// Create an engine backed by `store` for the high score.
    pub fn with_store(config: SimConfig, store: Box<dyn HighScoreStore>) -> Self {
        let SimConfig { seed, tuning } = config;
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        world_setup::setup_arena(&mut world, &mut rng, &tuning);

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            input_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            input: InputState::default(),
            viewpoint: Viewpoint::new(tuning.eye_height),
            player: PlayerState::new(tuning.player_max_health),
            armory: Armory::new(),
            waves: WaveController::default(),
            score: ScoreState::new(store),
            effects: EffectsState::new(seed),
            scene: SceneTracker::default(),
            tuning,
        }
    }

    /// Queue an input event for processing at the next frame boundary.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Advance the simulation by one frame of `dt_secs` seconds and return
    /// the resulting snapshot. Time only advances while Active.
    pub fn tick(&mut self, dt_secs: f64) -> GameStateSnapshot {
        self.process_inputs();

        if self.phase == GamePhase::Active {
            let dt = dt_secs.max(0.0);
            self.time.advance(dt);
            self.run_systems(dt as f32);
        }

        let scene_commands = systems::scene_sync::run(&self.world, &self.effects, &mut self.scene);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            &self.viewpoint,
            &self.player,
            &self.armory,
            &self.waves,
            &self.score,
            &self.effects,
            scene_commands,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn armory(&self) -> &Armory {
        &self.armory
    }

    pub fn waves(&self) -> &WaveController {
        &self.waves
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn effects(&self) -> &EffectsState {
        &self.effects
    }

    pub fn scene(&self) -> &SceneTracker {
        &self.scene
    }

    /// Spawn a hostile directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_hostile(
        &mut self,
        kind: outbreak_core::enums::HostileKind,
        position: glam::Vec3,
    ) -> hecs::Entity {
        let wave = self.waves.wave;
        world_setup::spawn_hostile(&mut self.world, &mut self.rng, kind, position, wave)
    }

    /// Remove every obstacle from the arena (for testing shots in the open).
    #[cfg(test)]
    pub fn clear_obstacles(&mut self) {
        let obstacles: Vec<hecs::Entity> = self
            .world
            .query::<&outbreak_core::components::Obstacle>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for e in obstacles {
            let _ = self.world.despawn(e);
        }
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn effects_mut(&mut self) -> &mut EffectsState {
        &mut self.effects
    }

    #[cfg(test)]
    pub fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }

    #[cfg(test)]
    pub fn armory_mut(&mut self) -> &mut Armory {
        &mut self.armory
    }

    #[cfg(test)]
    pub fn waves_mut(&mut self) -> &mut WaveController {
        &mut self.waves
    }

    /// Process all queued input.
    fn process_inputs(&mut self) {
        while let Some(event) = self.input_queue.pop_front() {
            self.handle_input(event);
        }
    }

    /// Handle a single input event.
    fn handle_input(&mut self, event: InputEvent) {
        match (self.phase, &event) {
            // Terminal: everything is ignored until the host restarts.
            (GamePhase::GameOver, _) => {}
            (GamePhase::Menu | GamePhase::Paused, InputEvent::PointerLock { locked: true }) => {
                log::info!("pointer locked, simulation active");
                self.phase = GamePhase::Active;
            }
            (GamePhase::Active, InputEvent::PointerLock { locked: false }) => {
                log::info!("pointer released, simulation paused");
                self.phase = GamePhase::Paused;
                self.input.release_all();
            }
            (_, InputEvent::PointerLock { .. }) => {}
            (GamePhase::Active, _) => self.input.apply(&event),
            (GamePhase::Menu | GamePhase::Paused, _) => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now_ms = self.time.elapsed_ms;

        // 1. Viewpoint movement
        systems::movement::run(&mut self.viewpoint, &mut self.input, &self.tuning, dt);
        // 2. Weapon selection and firing
        systems::fire_control::run(
            &mut self.world,
            &mut self.armory,
            &mut self.input,
            &self.viewpoint,
            &mut self.rng,
            &mut self.effects,
            &mut self.audio_events,
            now_ms,
        );
        // 3. Projectile integration and hits
        systems::projectiles::run(
            &mut self.world,
            &mut self.waves,
            &mut self.score,
            &mut self.effects,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            self.tuning.projectile_ttl_ms,
            now_ms,
            dt,
        );
        self.flush_despawns();
        // 4. Wave state machine and spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.waves,
            &mut self.score,
            &mut self.effects,
            &mut self.audio_events,
            &self.tuning,
            self.viewpoint.position,
            now_ms,
        );
        // 5. Hostile steering and contact damage
        let player_killed = systems::hostile_ai::run(
            &mut self.world,
            &mut self.player,
            &mut self.effects,
            &mut self.audio_events,
            &self.tuning,
            self.viewpoint.position,
            now_ms,
            dt,
        );
        if player_killed {
            log::info!(
                "game over on wave {} with score {} (high {})",
                self.waves.wave,
                self.score.score,
                self.score.high_score
            );
            self.phase = GamePhase::GameOver;
            self.input.release_all();
        }
        // 6. Cosmetic effect sweep
        systems::effects::run(&mut self.effects, dt);
    }

    fn flush_despawns(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            // Already gone if two projectiles claimed the same target.
            let _ = self.world.despawn(entity);
        }
    }
}
