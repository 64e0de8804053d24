//! Wave spawning system: ends cleared waves, starts due ones, and spawns
//! hostiles on a ring around the viewpoint.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use outbreak_core::events::AudioEvent;
use outbreak_core::tuning::Tuning;

use crate::effects::EffectsState;
use crate::score::ScoreState;
use crate::wave::WaveController;
use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    waves: &mut WaveController,
    score: &mut ScoreState,
    effects: &mut EffectsState,
    audio_events: &mut Vec<AudioEvent>,
    tuning: &Tuning,
    viewpoint: Vec3,
    now_ms: f64,
) {
    if let Some(wave) = waves.try_finish(now_ms) {
        log::info!("wave {wave} cleared at {:.1}s, score {}", now_ms / 1000.0, score.score);
        audio_events.push(AudioEvent::WaveCleared { wave });
    }

    if waves.start_due(now_ms, tuning) {
        let start = waves.begin_wave(tuning);
        score.add(start.bonus);
        effects.wave_announcement(start);
        if start.boss {
            log::info!("boss wave {} started", start.wave);
            audio_events.push(AudioEvent::BossRoar { wave: start.wave });
        } else {
            log::info!(
                "wave {} started: {} hostiles, bonus {}",
                start.wave,
                waves.quota_remaining,
                start.bonus
            );
            audio_events.push(AudioEvent::WaveStart { wave: start.wave });
        }
    }

    if waves.spawn_due(now_ms, tuning) {
        let kind = waves.next_kind();
        let position = world_setup::ring_point(rng, viewpoint, tuning.spawn_ring_radius);
        world_setup::spawn_hostile(world, rng, kind, position, waves.wave);
        waves.record_spawn(now_ms);
        log::debug!(
            "spawned {kind:?} at ({:.1}, {:.1}), {} left to spawn",
            position.x,
            position.z,
            waves.quota_remaining
        );
    }
}
