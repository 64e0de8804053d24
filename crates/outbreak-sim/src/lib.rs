//! Simulation engine for OUTBREAK.
//!
//! Owns the hecs ECS world and the per-session records, runs the frame
//! systems, and produces GameStateSnapshots for the host.

pub mod effects;
pub mod engine;
pub mod input;
pub mod player;
pub mod score;
pub mod systems;
pub mod wave;
pub mod weapons;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use outbreak_core as core;
