//! Game state snapshot: the complete visible state handed to the host each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::scene::SceneCommand;
use crate::types::SimTime;

/// Complete game state published after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewpoint: ViewpointView,
    pub hud: HudView,
    /// Scene mutations produced this frame, in application order.
    pub scene_commands: Vec<SceneCommand>,
    /// Sounds requested this frame.
    pub audio_events: Vec<AudioEvent>,
}

/// Camera placement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewpointView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Local-frame velocity (right, up, forward).
    pub velocity: Vec3,
}

/// Heads-up display contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: f32,
    pub max_health: f32,
    pub wave: u32,
    pub wave_phase: WavePhase,
    /// Hostiles of the current wave still alive.
    pub alive: u32,
    pub score: u64,
    pub high_score: u64,
    pub weapon: WeaponKind,
    /// Rounds left, `None` for infinite-ammo weapons.
    pub ammo: Option<u32>,
    /// Weapon kick in [0, 1].
    pub recoil: f32,
    /// Red tint strength in [0, 1].
    pub damage_flash: f32,
    pub popups: Vec<PopupView>,
    pub announcement: Option<AnnouncementView>,
    pub game_over: bool,
}

/// Floating score text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupView {
    pub points: u64,
    /// World position; rises as the popup ages.
    pub position: Vec3,
    pub opacity: f32,
}

/// Wave banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementView {
    pub wave: u32,
    pub bonus: u64,
    pub boss: bool,
    pub opacity: f32,
}
