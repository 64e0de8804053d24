//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus the engine records they need. They do not own state.

pub mod effects;
pub mod fire_control;
pub mod hostile_ai;
pub mod movement;
pub mod projectiles;
pub mod scene_sync;
pub mod snapshot;
pub mod wave_spawner;
