//! Runtime-adjustable gameplay tuning.
//!
//! Every field defaults to the matching value in [`crate::constants`].
//! `#[serde(default)]` lets a settings file override only the fields it names.

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub eye_height: f32,
    pub move_damping: f32,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub player_max_health: f32,
    pub projectile_ttl_ms: f64,
    pub wave_delay_ms: f64,
    pub spawn_interval_ms: f64,
    pub spawn_ring_radius: f32,
    pub wave_base_quota: u32,
    pub wave_quota_per_level: u32,
    pub boss_wave_interval: u32,
    pub wave_bonus_points: u64,
    pub separation_radius: f32,
    pub separation_weight: f32,
    pub obstacle_count: usize,
    pub building_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            eye_height: EYE_HEIGHT,
            move_damping: MOVE_DAMPING,
            move_speed: MOVE_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            player_max_health: PLAYER_MAX_HEALTH,
            projectile_ttl_ms: PROJECTILE_TTL_MS,
            wave_delay_ms: WAVE_DELAY_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_ring_radius: SPAWN_RING_RADIUS,
            wave_base_quota: WAVE_BASE_QUOTA,
            wave_quota_per_level: WAVE_QUOTA_PER_LEVEL,
            boss_wave_interval: BOSS_WAVE_INTERVAL,
            wave_bonus_points: WAVE_BONUS_POINTS,
            separation_radius: SEPARATION_RADIUS,
            separation_weight: SEPARATION_WEIGHT,
            obstacle_count: OBSTACLE_COUNT,
            building_count: BUILDING_COUNT,
        }
    }
}

impl Tuning {
    /// True when `wave` is a boss wave.
    pub fn is_boss_wave(&self, wave: u32) -> bool {
        self.boss_wave_interval > 0 && wave > 0 && wave % self.boss_wave_interval == 0
    }

    /// Ordinary-wave spawn quota: `base + per_level * (wave - 1)`.
    pub fn wave_quota(&self, wave: u32) -> u32 {
        self.wave_base_quota + self.wave_quota_per_level * wave.saturating_sub(1)
    }

    /// Bonus credited when an ordinary wave starts.
    pub fn wave_bonus(&self, wave: u32) -> u64 {
        self.wave_bonus_points * wave.saturating_sub(1) as u64
    }
}
