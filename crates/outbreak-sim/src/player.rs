//! Viewpoint and player vitals, owned by the engine.

use glam::Vec3;

use outbreak_core::types::Orientation;

/// First-person camera: where the player stands and looks.
#[derive(Debug, Clone, Default)]
pub struct Viewpoint {
    pub position: Vec3,
    pub orientation: Orientation,
    /// Local-frame velocity: x = right, y = up, z = forward.
    pub velocity: Vec3,
}

impl Viewpoint {
    /// Standing at the origin at eye height, looking down -z.
    pub fn new(eye_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, eye_height, 0.0),
            ..Default::default()
        }
    }

    /// Ground-plane displacement for a local velocity over `dt` seconds.
    pub fn ground_displacement(&self, dt: f32) -> Vec3 {
        (self.orientation.flat_right() * self.velocity.x
            + self.orientation.flat_forward() * self.velocity.z)
            * dt
    }
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub health: f32,
    pub max_health: f32,
    /// Set once when health reaches zero; never cleared.
    pub dead: bool,
}

impl PlayerState {
    pub fn new(max_health: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            dead: false,
        }
    }

    /// Subtract damage (clamped at zero). Returns true exactly once, on the
    /// hit that kills.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if self.dead {
            return false;
        }
        self.health = (self.health - amount.max(0.0)).max(0.0);
        if self.health <= 0.0 {
            self.dead = true;
            return true;
        }
        false
    }
}
