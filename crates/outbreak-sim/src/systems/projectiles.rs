//! Projectile system: integrates shots and resolves their collisions.
//!
//! Each live projectile sweeps the segment it covered this step against every
//! obstacle and hostile; the nearest entry wins, obstacles on ties. Hostile
//! health is tracked locally for the frame so a hostile killed by
//! one projectile cannot absorb another.

use glam::Vec3;
use hecs::World;

use outbreak_ai::steering::hostile_bounds;
use outbreak_core::components::*;
use outbreak_core::enums::HostileKind;
use outbreak_core::events::AudioEvent;
use outbreak_core::types::Aabb;

use crate::effects::EffectsState;
use crate::score::ScoreState;
use crate::wave::WaveController;

/// A hostile as seen by this frame's collision pass.
struct Target {
    entity: hecs::Entity,
    bounds: Aabb,
    head: Vec3,
    health: f32,
    kind: HostileKind,
    kill_points: u64,
    wave: u32,
}

/// Advance all projectiles by `dt` seconds and resolve hits.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    waves: &mut WaveController,
    score: &mut ScoreState,
    effects: &mut EffectsState,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
    ttl_ms: f64,
    now_ms: f64,
    dt: f32,
) {
    let obstacles: Vec<(hecs::Entity, Aabb)> = world
        .query::<(&Obstacle, &Position)>()
        .iter()
        .map(|(e, (obstacle, pos))| (e, obstacle_bounds(obstacle, pos.0)))
        .collect();

    let mut targets: Vec<Target> = world
        .query::<(&Hostile, &Position, &Health)>()
        .iter()
        .map(|(e, (hostile, pos, health))| {
            let bounds = hostile_bounds(pos.0, hostile.scale);
            Target {
                entity: e,
                head: Vec3::new(pos.0.x, bounds.max.y, pos.0.z),
                bounds,
                health: health.current,
                kind: hostile.kind,
                kill_points: hostile.kill_points,
                wave: hostile.wave,
            }
        })
        .collect();

    let mut bumped = Vec::new();
    for (entity, (projectile, pos)) in world.query_mut::<(&Projectile, &mut Position)>() {
        let start = pos.0;
        pos.0 += projectile.velocity * dt;

        if now_ms - projectile.spawned_ms > ttl_ms {
            despawn_buffer.push(entity);
            continue;
        }

        // Sweep the step so fast or long frames cannot skip a target.
        let margin = Vec3::splat(projectile.radius);
        let obstacle_hit = obstacles
            .iter()
            .filter_map(|(e, b)| b.expanded(margin).segment_entry(start, pos.0).map(|t| (t, *e)))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        let target_hit = targets
            .iter()
            .enumerate()
            .filter(|(_, t)| t.health > 0.0)
            .filter_map(|(i, t)| t.bounds.expanded(margin).segment_entry(start, pos.0).map(|s| (s, i)))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let (t_hit, index) = match (obstacle_hit, target_hit) {
            (Some((t_obstacle, obstacle)), hit)
                if hit.map_or(true, |(t_target, _)| t_obstacle <= t_target) =>
            {
                despawn_buffer.push(entity);
                effects.obstacle_bump(obstacle);
                bumped.push(obstacle);
                audio_events.push(AudioEvent::ObstacleHit);
                continue;
            }
            (_, Some(hit)) => hit,
            _ => continue,
        };
        let impact = start.lerp(pos.0, t_hit);
        let target = &mut targets[index];

        despawn_buffer.push(entity);
        target.health = (target.health - projectile.damage).max(0.0);
        effects.blood(impact);

        if target.health > 0.0 {
            audio_events.push(AudioEvent::HostileHit { kind: target.kind });
            continue;
        }

        despawn_buffer.push(target.entity);
        waves.record_kill(target.wave);
        score.kills += 1;
        score.add(target.kill_points);
        effects.score_popup(target.kill_points, target.head);
        audio_events.push(AudioEvent::HostileKilled { kind: target.kind });
        log::debug!(
            "{:?} killed (+{}), {} left in wave",
            target.kind,
            target.kill_points,
            waves.alive
        );
    }

    // Shot obstacles take a new tint.
    for obstacle in bumped {
        let tint = effects.random_tint();
        if let Ok(mut o) = world.get::<&mut Obstacle>(obstacle) {
            o.tint = tint;
        }
    }
    for target in &targets {
        if target.health > 0.0 {
            if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
                health.current = target.health;
            }
        }
    }
}

/// Bounding box of an obstacle whose base sits at `base`.
pub fn obstacle_bounds(obstacle: &Obstacle, base: Vec3) -> Aabb {
    let center = base + Vec3::new(0.0, obstacle.half_extents.y, 0.0);
    Aabb::from_center(center, obstacle.half_extents)
}
