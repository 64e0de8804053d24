//! Render commands derived from simulation state.
//!
//! The render collaborator applies these to its scene graph. It never
//! writes back into the simulation; every object is named by a stable
//! visual id for its whole lifetime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::HostileKind;

/// What a visual id should be drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    Ground,
    Obstacle,
    Building,
    Hostile(HostileKind),
    Projectile,
    BloodParticle,
    BloodDecal,
    MuzzleFlash,
}

/// Per-frame visual parameters of one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// Box centre for static geometry, feet for hostiles.
    pub position: Vec3,
    /// Heading about +y (radians).
    pub yaw: f32,
    /// Box dimensions for static geometry, uniform scale in `x` for hostiles,
    /// radius in `x` for projectiles and particles.
    pub size: Vec3,
    /// Primary RGB colour.
    pub color: u32,
    /// Secondary RGB colour (building neon trim).
    pub accent: u32,
    /// 0 = invisible, 1 = opaque.
    pub opacity: f32,
    /// Signed walk-cycle limb angle (radians).
    pub limb_swing: f32,
    /// Remaining health over maximum, 1.0 for objects without health.
    pub health_fraction: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            size: Vec3::ONE,
            color: 0xffffff,
            accent: 0,
            opacity: 1.0,
            limb_swing: 0.0,
            health_fraction: 1.0,
        }
    }
}

/// One scene-graph mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum SceneCommand {
    Create {
        id: u64,
        kind: VisualKind,
        state: VisualState,
    },
    /// Sent only when the state differs from the last one sent.
    Update { id: u64, state: VisualState },
    Remove { id: u64 },
}

impl SceneCommand {
    pub fn id(&self) -> u64 {
        match self {
            SceneCommand::Create { id, .. }
            | SceneCommand::Update { id, .. }
            | SceneCommand::Remove { id } => *id,
        }
    }
}
