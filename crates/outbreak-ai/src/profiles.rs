//! Archetype-specific hostile profiles.
//!
//! Consolidates per-kind stats used by the spawner and steering.

use outbreak_core::enums::HostileKind;
use rand::Rng;

/// Stat block for a hostile kind.
pub struct HostileProfile {
    pub max_health: f32,
    /// Minimum ground speed (units/s).
    pub base_speed: f32,
    /// Random extra speed rolled in `[0, speed_jitter)` at spawn.
    pub speed_jitter: f32,
    /// Damage per contact attack.
    pub damage: f32,
    pub attack_cooldown_ms: f64,
    pub kill_points: u64,
    /// Uniform size multiplier.
    pub scale: f32,
    /// Walk cycle rate range (radians/s).
    pub walk_rate_min: f32,
    pub walk_rate_jitter: f32,
}

/// Get the profile for a given kind.
pub fn get_profile(kind: HostileKind) -> HostileProfile {
    use outbreak_core::constants::*;

    match kind {
        HostileKind::Zombie => HostileProfile {
            max_health: ZOMBIE_HEALTH,
            base_speed: ZOMBIE_BASE_SPEED,
            speed_jitter: ZOMBIE_SPEED_JITTER,
            damage: ZOMBIE_DAMAGE,
            attack_cooldown_ms: ZOMBIE_ATTACK_COOLDOWN_MS,
            kill_points: ZOMBIE_KILL_POINTS,
            scale: 1.0,
            walk_rate_min: WALK_RATE_MIN,
            walk_rate_jitter: WALK_RATE_JITTER,
        },
        HostileKind::Boss => HostileProfile {
            max_health: BOSS_HEALTH,
            base_speed: BOSS_SPEED,
            speed_jitter: 0.0,
            damage: BOSS_DAMAGE,
            attack_cooldown_ms: BOSS_ATTACK_COOLDOWN_MS,
            kill_points: BOSS_KILL_POINTS,
            scale: BOSS_SCALE,
            // Heavier gait.
            walk_rate_min: WALK_RATE_MIN * 0.5,
            walk_rate_jitter: 0.0,
        },
    }
}

impl HostileProfile {
    /// Roll a ground speed for a fresh spawn.
    pub fn roll_speed<R: Rng>(&self, rng: &mut R) -> f32 {
        self.base_speed + jitter(rng, self.speed_jitter)
    }

    /// Roll a walk cycle rate for a fresh spawn.
    pub fn roll_walk_rate<R: Rng>(&self, rng: &mut R) -> f32 {
        self.walk_rate_min + jitter(rng, self.walk_rate_jitter)
    }
}

/// Random starting point in the walk cycle, so a group does not step in
/// unison.
pub fn roll_walk_phase<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..std::f32::consts::TAU)
}

fn jitter<R: Rng>(rng: &mut R, range: f32) -> f32 {
    if range > 0.0 {
        rng.gen_range(0.0..range)
    } else {
        0.0
    }
}
