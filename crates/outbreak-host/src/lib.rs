//! OUTBREAK host runtime.
//!
//! This crate wires the headless simulation to the outside world: it paces
//! frames on a game-loop thread, loads settings, persists the high score to
//! disk and turns audio events into buffer playback.

pub mod audio;
pub mod clock;
pub mod game_loop;
pub mod settings;
pub mod state;
pub mod storage;

pub use outbreak_core as core;
