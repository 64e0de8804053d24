//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// World-space position. For hostiles and obstacles this is the footprint
/// origin on the ground; for projectiles the centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Hit points. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// A pursuing adversary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: HostileKind,
    /// Ground speed (units per second).
    pub speed: f32,
    /// Damage dealt per contact attack.
    pub damage: f32,
    pub attack_cooldown_ms: f64,
    /// Simulation time of the last contact attack.
    pub last_attack_ms: Option<f64>,
    /// Score credited on kill.
    pub kill_points: u64,
    /// Uniform size multiplier applied to the bounding box.
    pub scale: f32,
    /// Wave that spawned this hostile.
    pub wave: u32,
}

/// Heading about +y (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    pub yaw: f32,
}

/// Walk animation phase, advanced every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkCycle {
    pub phase: f32,
    /// Radians per second.
    pub rate: f32,
}

/// A fired shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub weapon: WeaponKind,
    pub velocity: Vec3,
    pub damage: f32,
    pub radius: f32,
    pub spawned_ms: f64,
}

/// Static box that stops projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub half_extents: Vec3,
    /// RGB tint, re-rolled when the obstacle is shot.
    pub tint: u32,
}

/// Neon building. Presentation only; nothing collides with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub yaw: f32,
    pub window_color: u32,
    pub neon_color: u32,
}
