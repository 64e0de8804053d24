//! Hostile AI system: steers hostiles toward the viewpoint and applies
//! contact damage.

use glam::Vec3;
use hecs::World;

use outbreak_ai::steering::{self, SteeringContext};
use outbreak_core::components::*;
use outbreak_core::events::AudioEvent;
use outbreak_core::tuning::Tuning;

use crate::effects::EffectsState;
use crate::player::PlayerState;

/// Run one AI step. Returns true on the frame the player dies.
///
/// Steering reads peer positions from the start of the frame, so the
/// result does not depend on iteration order.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    effects: &mut EffectsState,
    audio_events: &mut Vec<AudioEvent>,
    tuning: &Tuning,
    viewpoint: Vec3,
    now_ms: f64,
    dt: f32,
) -> bool {
    let positions: Vec<(hecs::Entity, Vec3)> = world
        .query::<(&Hostile, &Position)>()
        .iter()
        .map(|(e, (_, pos))| (e, pos.0))
        .collect();

    let player_box = steering::player_bounds(viewpoint);
    let mut killed = false;

    for (entity, (hostile, pos, facing, walk)) in
        world.query_mut::<(&mut Hostile, &mut Position, &mut Facing, &mut WalkCycle)>()
    {
        let peers: Vec<Vec3> = positions
            .iter()
            .filter(|(e, _)| *e != entity)
            .map(|(_, p)| *p)
            .collect();

        let update = steering::steer(&SteeringContext {
            position: pos.0,
            target: viewpoint,
            speed: hostile.speed,
            peers: &peers,
            separation_radius: tuning.separation_radius,
            separation_weight: tuning.separation_weight,
            dt,
        });
        pos.0 = update.new_position;
        facing.yaw = update.yaw;
        walk.phase = (walk.phase + walk.rate * dt).rem_euclid(std::f32::consts::TAU);

        if player.dead {
            continue;
        }
        let touching = steering::hostile_bounds(pos.0, hostile.scale).intersects(&player_box);
        if !touching
            || !steering::attack_ready(hostile.last_attack_ms, now_ms, hostile.attack_cooldown_ms)
        {
            continue;
        }

        hostile.last_attack_ms = Some(now_ms);
        let lethal = player.apply_damage(hostile.damage);
        effects.damage_flash();
        audio_events.push(AudioEvent::PlayerHurt {
            health: player.health,
        });
        if lethal {
            audio_events.push(AudioEvent::GameOver);
            killed = true;
        }
    }

    killed
}
