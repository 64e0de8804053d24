//! Hostile steering and contact rules.
//!
//! Pure functions that compute movement and attack decisions for hostile
//! entities from plain data. No ECS dependency.

use glam::Vec3;
use outbreak_core::constants::{HOSTILE_CENTER_HEIGHT, HOSTILE_HALF_EXTENTS, PLAYER_HALF_EXTENTS};
use outbreak_core::types::{yaw_towards, Aabb};

/// Peers closer than this are treated as coincident and ignored.
const MIN_SEPARATION_DIST: f32 = 1e-4;

/// Input to the steering step for a single hostile.
pub struct SteeringContext<'a> {
    pub position: Vec3,
    /// Viewpoint position.
    pub target: Vec3,
    pub speed: f32,
    /// Positions of every other live hostile.
    pub peers: &'a [Vec3],
    pub separation_radius: f32,
    pub separation_weight: f32,
    pub dt: f32,
}

/// Output of the steering step.
pub struct SteeringUpdate {
    pub new_position: Vec3,
    /// Heading that faces the target.
    pub yaw: f32,
}

/// Advance one hostile toward the target while keeping clear of peers.
pub fn steer(ctx: &SteeringContext) -> SteeringUpdate {
    let mut to_target = ctx.target - ctx.position;
    to_target.y = 0.0;
    let pursuit = to_target.normalize_or_zero();

    let push = separation(ctx.position, ctx.peers, ctx.separation_radius);
    let direction = (pursuit + push * ctx.separation_weight).normalize_or_zero();

    let new_position = ctx.position + direction * ctx.speed * ctx.dt.max(0.0);
    SteeringUpdate {
        new_position,
        yaw: yaw_towards(new_position, ctx.target),
    }
}

/// Sum of unit vectors pointing away from each nearby peer, weighted by
/// inverse distance.
pub fn separation(position: Vec3, peers: &[Vec3], radius: f32) -> Vec3 {
    peers.iter().fold(Vec3::ZERO, |acc, peer| {
        let diff = position - *peer;
        let dist = diff.length();
        if dist < radius && dist > MIN_SEPARATION_DIST {
            acc + diff / dist * (1.0 / dist)
        } else {
            acc
        }
    })
}

/// Bounding box of a hostile standing at `position` with size multiplier `scale`.
pub fn hostile_bounds(position: Vec3, scale: f32) -> Aabb {
    let center = position + Vec3::new(0.0, HOSTILE_CENTER_HEIGHT * scale, 0.0);
    Aabb::from_center(center, Vec3::from_array(HOSTILE_HALF_EXTENTS) * scale)
}

/// Contact box around the viewpoint.
pub fn player_bounds(viewpoint: Vec3) -> Aabb {
    Aabb::from_center(viewpoint, Vec3::from_array(PLAYER_HALF_EXTENTS))
}

/// A contact attack lands only once strictly more than the cooldown has
/// passed since the previous one.
pub fn attack_ready(last_attack_ms: Option<f64>, now_ms: f64, cooldown_ms: f64) -> bool {
    match last_attack_ms {
        None => true,
        Some(last) => now_ms - last > cooldown_ms,
    }
}

/// Signed limb angle for a walk phase.
pub fn limb_swing(phase: f32, swing: f32) -> f32 {
    phase.sin() * swing
}
