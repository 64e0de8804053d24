//! Viewpoint movement: mouse look, velocity damping and integration.

use glam::{Vec2, Vec3};

use outbreak_core::tuning::Tuning;

use crate::input::InputState;
use crate::player::Viewpoint;

/// Apply look, damp and accelerate the velocity, then translate the
/// viewpoint along its ground-projected axes.
pub fn run(viewpoint: &mut Viewpoint, input: &mut InputState, tuning: &Tuning, dt: f32) {
    let look = input.take_look();
    viewpoint
        .orientation
        .look(look.x, look.y, tuning.look_sensitivity);

    integrate_velocity(&mut viewpoint.velocity, input.move_axes(), tuning, dt);

    viewpoint.position += viewpoint.ground_displacement(dt);
    viewpoint.position.y = tuning.eye_height;
}

/// Exponential damping regardless of input, then an impulse along each
/// active axis. `axes` is (right, forward).
pub fn integrate_velocity(velocity: &mut Vec3, axes: Vec2, tuning: &Tuning, dt: f32) {
    let dt = dt.max(0.0);
    // A factor above 1 would reverse the velocity.
    let k = (tuning.move_damping * dt).min(1.0);
    velocity.x -= velocity.x * k;
    velocity.z -= velocity.z * k;

    let direction = axes.normalize_or_zero();
    if axes.y != 0.0 {
        velocity.z += direction.y * tuning.move_speed * dt;
    }
    if axes.x != 0.0 {
        velocity.x += direction.x * tuning.move_speed * dt;
    }
}
