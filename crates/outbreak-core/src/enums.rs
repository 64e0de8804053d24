//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first pointer lock.
    #[default]
    Menu,
    Active,
    /// Pointer lock lost mid-session.
    Paused,
    /// Player health reached zero. Terminal.
    GameOver,
}

/// Wave controller phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Between waves.
    #[default]
    Delay,
    /// Spawning and combat.
    InProgress,
}

/// Player weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Shotgun,
    Rifle,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Pistol, WeaponKind::Shotgun, WeaponKind::Rifle];

    /// Slot in the weapon table.
    pub fn index(self) -> usize {
        match self {
            WeaponKind::Pistol => 0,
            WeaponKind::Shotgun => 1,
            WeaponKind::Rifle => 2,
        }
    }
}

/// Hostile archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    #[default]
    Zombie,
    Boss,
}

/// Cosmetic effect kinds. None of these feed back into gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Airborne droplet that falls under gravity.
    BloodParticle,
    /// Splat on the ground plane.
    BloodDecal,
    /// Floating "+N" text.
    ScorePopup { points: u64 },
    /// Centre-screen wave banner.
    WaveAnnouncement { wave: u32, bonus: u64, boss: bool },
    /// Weapon kick.
    Recoil,
    MuzzleFlash,
    /// Obstacle hop after being shot.
    ObstacleBump,
    /// Red screen tint after taking damage.
    DamageFlash,
}
