//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events for the host sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A weapon fired.
    Shot { weapon: WeaponKind },
    /// Trigger pulled on an empty magazine.
    DryFire { weapon: WeaponKind },
    /// Projectile stopped on an obstacle.
    ObstacleHit,
    /// Projectile struck a hostile that survived.
    HostileHit { kind: HostileKind },
    HostileKilled { kind: HostileKind },
    /// Player took contact damage.
    PlayerHurt { health: f32 },
    WaveStart { wave: u32 },
    /// Boss wave started.
    BossRoar { wave: u32 },
    WaveCleared { wave: u32 },
    GameOver,
}

impl AudioEvent {
    /// Name of the sound buffer this event plays.
    pub fn sound_name(&self) -> &'static str {
        match self {
            AudioEvent::Shot {
                weapon: WeaponKind::Pistol,
            } => "pistol",
            AudioEvent::Shot {
                weapon: WeaponKind::Shotgun,
            } => "shotgun",
            AudioEvent::Shot {
                weapon: WeaponKind::Rifle,
            } => "rifle",
            AudioEvent::DryFire { .. } => "dry_fire",
            AudioEvent::ObstacleHit => "ricochet",
            AudioEvent::HostileHit { .. } => "hit",
            AudioEvent::HostileKilled {
                kind: HostileKind::Zombie,
            } => "zombie_death",
            AudioEvent::HostileKilled {
                kind: HostileKind::Boss,
            } => "boss_death",
            AudioEvent::PlayerHurt { .. } => "hurt",
            AudioEvent::WaveStart { .. } => "wave_start",
            AudioEvent::BossRoar { .. } => "boss_roar",
            AudioEvent::WaveCleared { .. } => "wave_cleared",
            AudioEvent::GameOver => "game_over",
        }
    }

    /// Every sound name the simulation can request.
    pub const SOUND_NAMES: [&'static str; 13] = [
        "pistol",
        "shotgun",
        "rifle",
        "dry_fire",
        "ricochet",
        "hit",
        "zombie_death",
        "boss_death",
        "hurt",
        "wave_start",
        "boss_roar",
        "wave_cleared",
        "game_over",
    ];
}
