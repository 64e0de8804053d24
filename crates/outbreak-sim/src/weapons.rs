//! Weapon profiles and the player's armory.
//!
//! The shot cooldown is tracked once per armory, not per weapon: switching
//! weapons does not reset it.

use outbreak_core::constants::*;
use outbreak_core::enums::WeaponKind;

/// Static ballistics and magazine for a weapon.
pub struct WeaponProfile {
    pub damage: f32,
    pub cooldown_ms: f64,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    /// Projectiles per shot.
    pub pellets: u32,
    /// Per-component direction jitter, 0 for a true shot.
    pub spread: f32,
    /// `None` for infinite ammo.
    pub magazine: Option<u32>,
    /// Projectile colour.
    pub tracer_color: u32,
}

pub fn get_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Pistol => WeaponProfile {
            damage: PISTOL_DAMAGE,
            cooldown_ms: PISTOL_COOLDOWN_MS,
            projectile_speed: PISTOL_PROJECTILE_SPEED,
            projectile_radius: PISTOL_PROJECTILE_RADIUS,
            pellets: 1,
            spread: 0.0,
            magazine: None,
            tracer_color: 0xffff00,
        },
        WeaponKind::Shotgun => WeaponProfile {
            damage: SHOTGUN_DAMAGE,
            cooldown_ms: SHOTGUN_COOLDOWN_MS,
            projectile_speed: SHOTGUN_PROJECTILE_SPEED,
            projectile_radius: SHOTGUN_PROJECTILE_RADIUS,
            pellets: SHOTGUN_PELLETS,
            spread: SHOTGUN_SPREAD,
            magazine: Some(SHOTGUN_MAGAZINE),
            tracer_color: 0xff8800,
        },
        WeaponKind::Rifle => WeaponProfile {
            damage: RIFLE_DAMAGE,
            cooldown_ms: RIFLE_COOLDOWN_MS,
            projectile_speed: RIFLE_PROJECTILE_SPEED,
            projectile_radius: RIFLE_PROJECTILE_RADIUS,
            pellets: 1,
            spread: RIFLE_SPREAD,
            magazine: Some(RIFLE_MAGAZINE),
            tracer_color: 0x00ffff,
        },
    }
}

/// Outcome of pulling the trigger once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerResult {
    /// A shot left the barrel; ammo already decremented.
    Fired,
    /// Still inside the cooldown window.
    Cooling,
    /// Magazine empty. `audible` is false while the click is on cooldown.
    Empty { audible: bool },
}

/// Selected weapon, remaining ammo and shot timing.
#[derive(Debug, Clone)]
pub struct Armory {
    pub selected: WeaponKind,
    ammo: [Option<u32>; 3],
    last_shot_ms: Option<f64>,
    last_dry_fire_ms: Option<f64>,
}

impl Default for Armory {
    fn default() -> Self {
        Self::new()
    }
}

impl Armory {
    /// Pistol selected, every magazine full.
    pub fn new() -> Self {
        Self {
            selected: WeaponKind::Pistol,
            ammo: WeaponKind::ALL.map(|k| get_profile(k).magazine),
            last_shot_ms: None,
            last_dry_fire_ms: None,
        }
    }

    pub fn select(&mut self, kind: WeaponKind) {
        self.selected = kind;
    }

    /// Rounds left for `kind`, `None` when infinite.
    pub fn ammo(&self, kind: WeaponKind) -> Option<u32> {
        self.ammo[kind.index()]
    }

    pub fn last_shot_ms(&self) -> Option<f64> {
        self.last_shot_ms
    }

    /// Attempt one shot with the selected weapon at `now_ms`.
    pub fn pull_trigger(&mut self, now_ms: f64) -> TriggerResult {
        let profile = get_profile(self.selected);
        let cooled = |last: Option<f64>| last.map_or(true, |t| now_ms - t >= profile.cooldown_ms);

        if !cooled(self.last_shot_ms) {
            return TriggerResult::Cooling;
        }
        match &mut self.ammo[self.selected.index()] {
            Some(0) => {
                let audible = cooled(self.last_dry_fire_ms);
                if audible {
                    self.last_dry_fire_ms = Some(now_ms);
                }
                TriggerResult::Empty { audible }
            }
            Some(rounds) => {
                *rounds -= 1;
                self.last_shot_ms = Some(now_ms);
                TriggerResult::Fired
            }
            None => {
                self.last_shot_ms = Some(now_ms);
                TriggerResult::Fired
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_ammo(&mut self, kind: WeaponKind, rounds: Option<u32>) {
        self.ammo[kind.index()] = rounds;
    }
}
