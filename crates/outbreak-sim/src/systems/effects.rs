//! Effect sweep: ages every effect, moves the ones with velocity, and drops
//! the expired ones.

use outbreak_core::constants::PARTICLE_GRAVITY;
use outbreak_core::enums::EffectKind;

use crate::effects::EffectsState;

pub fn run(effects: &mut EffectsState, dt: f32) {
    let dt_ms = dt as f64 * 1000.0;
    for effect in effects.effects.iter_mut() {
        effect.age_ms += dt_ms;
        if effect.kind == EffectKind::BloodParticle {
            effect.velocity.y -= PARTICLE_GRAVITY * dt;
        }
        effect.position += effect.velocity * dt;
        // Droplets come to rest on the ground.
        if effect.position.y < 0.0 {
            effect.position.y = 0.0;
            effect.velocity = glam::Vec3::ZERO;
        }
    }
    effects.effects.retain(|e| !e.expired());
}
