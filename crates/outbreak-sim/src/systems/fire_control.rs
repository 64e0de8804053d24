//! Fire control system: weapon selection and trigger handling.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::events::AudioEvent;

use crate::effects::EffectsState;
use crate::input::InputState;
use crate::player::Viewpoint;
use crate::weapons::{get_profile, Armory, TriggerResult};
use crate::world_setup;

/// Distance in front of the eye where the muzzle flash shows.
const MUZZLE_OFFSET: f32 = 0.8;

/// Apply a pending weapon switch and fire while the trigger is held.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    armory: &mut Armory,
    input: &mut InputState,
    viewpoint: &Viewpoint,
    rng: &mut ChaCha8Rng,
    effects: &mut EffectsState,
    audio_events: &mut Vec<AudioEvent>,
    now_ms: f64,
) {
    if let Some(kind) = input.take_weapon_selection() {
        armory.select(kind);
    }
    if input.shooting() {
        fire(world, armory, viewpoint, rng, effects, audio_events, now_ms);
    }
}

/// Pull the trigger once. Returns the number of projectiles spawned.
pub fn fire(
    world: &mut World,
    armory: &mut Armory,
    viewpoint: &Viewpoint,
    rng: &mut ChaCha8Rng,
    effects: &mut EffectsState,
    audio_events: &mut Vec<AudioEvent>,
    now_ms: f64,
) -> u32 {
    let weapon = armory.selected;
    match armory.pull_trigger(now_ms) {
        TriggerResult::Cooling => 0,
        TriggerResult::Empty { audible } => {
            if audible {
                audio_events.push(AudioEvent::DryFire { weapon });
            }
            0
        }
        TriggerResult::Fired => {
            let profile = get_profile(weapon);
            let aim = viewpoint.orientation.forward();
            for _ in 0..profile.pellets {
                let direction = scatter(aim, profile.spread, rng);
                world_setup::spawn_projectile(
                    world,
                    weapon,
                    &profile,
                    viewpoint.position,
                    direction * profile.projectile_speed,
                    now_ms,
                );
            }
            effects.recoil();
            effects.muzzle_flash(viewpoint.position + aim * MUZZLE_OFFSET);
            audio_events.push(AudioEvent::Shot { weapon });
            profile.pellets
        }
    }
}

/// Perturb each component of `aim` within `±spread` and renormalize.
/// A zero spread consumes no randomness.
pub fn scatter(aim: Vec3, spread: f32, rng: &mut ChaCha8Rng) -> Vec3 {
    if spread <= 0.0 {
        return aim;
    }
    let jitter = Vec3::new(
        rng.gen_range(-spread..=spread),
        rng.gen_range(-spread..=spread),
        rng.gen_range(-spread..=spread),
    );
    (aim + jitter).try_normalize().unwrap_or(aim)
}
