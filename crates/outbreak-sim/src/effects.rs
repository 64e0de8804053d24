//! Cosmetic effects: records with an age and a lifetime, swept every frame.
//!
//! Effects draw from their own RNG stream. Nothing in here is read back by
//! gameplay systems, so adding or removing effects never changes outcomes.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use outbreak_core::constants::*;
use outbreak_core::enums::EffectKind;

use crate::wave::WaveStart;

/// Mixed into the session seed so the effect stream differs from gameplay.
const FX_SEED_SALT: u64 = 0x0b1d_f00d_5eed_cafe;

#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    /// Unique per session, used as the effect's scene key.
    pub serial: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub age_ms: f64,
    pub lifetime_ms: f64,
    /// Entity the effect decorates (obstacle bumps).
    pub anchor: Option<hecs::Entity>,
}

impl Effect {
    /// Fraction of the lifetime elapsed, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return 1.0;
        }
        (self.age_ms / self.lifetime_ms).clamp(0.0, 1.0) as f32
    }

    /// Linear fade from 1 to 0 over the lifetime.
    pub fn opacity(&self) -> f32 {
        1.0 - self.progress()
    }

    pub fn expired(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }
}

#[derive(Debug, Clone)]
pub struct EffectsState {
    pub effects: Vec<Effect>,
    next_serial: u64,
    rng: ChaCha8Rng,
}

impl EffectsState {
    pub fn new(seed: u64) -> Self {
        Self {
            effects: Vec::new(),
            next_serial: 0,
            rng: ChaCha8Rng::seed_from_u64(seed ^ FX_SEED_SALT),
        }
    }

    fn push(&mut self, kind: EffectKind, position: Vec3, velocity: Vec3, lifetime_ms: f64) -> &mut Effect {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.effects.push(Effect {
            kind,
            serial,
            position,
            velocity,
            age_ms: 0.0,
            lifetime_ms,
            anchor: None,
        });
        let last = self.effects.len() - 1;
        &mut self.effects[last]
    }

    /// Spray of droplets plus a ground splat under the hit point.
    pub fn blood(&mut self, at: Vec3) {
        for _ in 0..BLOOD_PARTICLES_PER_HIT {
            let velocity = Vec3::new(
                self.rng.gen_range(-2.0..2.0),
                self.rng.gen_range(1.0..4.0),
                self.rng.gen_range(-2.0..2.0),
            );
            self.push(EffectKind::BloodParticle, at, velocity, BLOOD_PARTICLE_LIFETIME_MS);
        }
        let splat = Vec3::new(
            at.x + self.rng.gen_range(-0.3..0.3),
            0.01,
            at.z + self.rng.gen_range(-0.3..0.3),
        );
        self.push(EffectKind::BloodDecal, splat, Vec3::ZERO, BLOOD_DECAL_LIFETIME_MS);
    }

    /// Floating "+N" that rises and fades.
    pub fn score_popup(&mut self, points: u64, at: Vec3) {
        self.push(
            EffectKind::ScorePopup { points },
            at,
            Vec3::new(0.0, 1.5, 0.0),
            SCORE_POPUP_LIFETIME_MS,
        );
    }

    /// Wave banner. A new banner replaces any still showing.
    pub fn wave_announcement(&mut self, start: WaveStart) {
        self.effects
            .retain(|e| !matches!(e.kind, EffectKind::WaveAnnouncement { .. }));
        self.push(
            EffectKind::WaveAnnouncement {
                wave: start.wave,
                bonus: start.bonus,
                boss: start.boss,
            },
            Vec3::ZERO,
            Vec3::ZERO,
            WAVE_ANNOUNCEMENT_MS,
        );
    }

    pub fn recoil(&mut self) {
        self.push(EffectKind::Recoil, Vec3::ZERO, Vec3::ZERO, RECOIL_MS);
    }

    pub fn muzzle_flash(&mut self, at: Vec3) {
        self.push(EffectKind::MuzzleFlash, at, Vec3::ZERO, MUZZLE_FLASH_MS);
    }

    /// Hop an obstacle that was just shot.
    pub fn obstacle_bump(&mut self, obstacle: hecs::Entity) {
        self.effects
            .retain(|e| !(e.kind == EffectKind::ObstacleBump && e.anchor == Some(obstacle)));
        self.push(EffectKind::ObstacleBump, Vec3::ZERO, Vec3::ZERO, OBSTACLE_BUMP_MS)
            .anchor = Some(obstacle);
    }

    pub fn damage_flash(&mut self) {
        self.push(EffectKind::DamageFlash, Vec3::ZERO, Vec3::ZERO, DAMAGE_FLASH_MS);
    }

    /// Random RGB colour for a freshly shot obstacle.
    pub fn random_tint(&mut self) -> u32 {
        self.rng.gen_range(0..=0xffffff)
    }

    /// Strongest fade level among live effects matching `kind`, 0 if none.
    pub fn level(&self, kind: EffectKind) -> f32 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind)
            .map(Effect::opacity)
            .fold(0.0, f32::max)
    }

    /// Extra height of an obstacle currently hopping.
    pub fn obstacle_lift(&self, obstacle: hecs::Entity) -> f32 {
        let bumped = self
            .effects
            .iter()
            .any(|e| e.kind == EffectKind::ObstacleBump && e.anchor == Some(obstacle));
        if bumped {
            OBSTACLE_BUMP_HEIGHT
        } else {
            0.0
        }
    }
}
