//! Wave controller: the Delay / InProgress state machine.
//!
//! Stored on the engine, not as ECS entities. The spawner system drives it;
//! the projectile system reports kills into it.

use outbreak_core::enums::{HostileKind, WavePhase};
use outbreak_core::tuning::Tuning;

/// Details of a wave that just started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveStart {
    pub wave: u32,
    pub boss: bool,
    /// Points credited for reaching this wave (0 on boss waves).
    pub bonus: u64,
}

#[derive(Debug, Clone, Default)]
pub struct WaveController {
    pub phase: WavePhase,
    /// Current (or last finished) wave number; 0 before the first wave.
    pub wave: u32,
    pub boss: bool,
    /// Hostiles of this wave not yet spawned.
    pub quota_remaining: u32,
    /// Hostiles of this wave spawned and still alive.
    pub alive: u32,
    /// When the previous wave ended. Session start counts as an end at 0.
    pub last_wave_end_ms: f64,
    /// When the last hostile of this wave spawned.
    pub last_spawn_ms: Option<f64>,
}

impl WaveController {
    /// Whether the inter-wave delay has run out.
    pub fn start_due(&self, now_ms: f64, tuning: &Tuning) -> bool {
        self.phase == WavePhase::Delay && now_ms - self.last_wave_end_ms > tuning.wave_delay_ms
    }

    /// Enter the next wave.
    pub fn begin_wave(&mut self, tuning: &Tuning) -> WaveStart {
        self.wave += 1;
        self.boss = tuning.is_boss_wave(self.wave);
        self.quota_remaining = if self.boss {
            1
        } else {
            tuning.wave_quota(self.wave)
        };
        self.alive = 0;
        self.last_spawn_ms = None;
        self.phase = WavePhase::InProgress;

        WaveStart {
            wave: self.wave,
            boss: self.boss,
            bonus: if self.boss {
                0
            } else {
                tuning.wave_bonus(self.wave)
            },
        }
    }

    /// Whether a hostile should spawn now. The first spawn of a wave is
    /// immediate; later ones wait strictly longer than the spawn interval.
    pub fn spawn_due(&self, now_ms: f64, tuning: &Tuning) -> bool {
        self.phase == WavePhase::InProgress
            && self.quota_remaining > 0
            && self
                .last_spawn_ms
                .map_or(true, |t| now_ms - t > tuning.spawn_interval_ms)
    }

    /// Kind of the next hostile to spawn.
    pub fn next_kind(&self) -> HostileKind {
        if self.boss {
            HostileKind::Boss
        } else {
            HostileKind::Zombie
        }
    }

    pub fn record_spawn(&mut self, now_ms: f64) {
        self.quota_remaining = self.quota_remaining.saturating_sub(1);
        self.alive += 1;
        self.last_spawn_ms = Some(now_ms);
    }

    /// Count a kill of a hostile spawned by `wave`. Kills of stragglers from
    /// earlier waves do not touch the current count.
    pub fn record_kill(&mut self, wave: u32) {
        if wave == self.wave {
            self.alive = self.alive.saturating_sub(1);
        }
    }

    /// Move to Delay if the quota is spent and nobody from this wave is
    /// alive. Returns the finished wave number.
    pub fn try_finish(&mut self, now_ms: f64) -> Option<u32> {
        if self.phase == WavePhase::InProgress && self.quota_remaining == 0 && self.alive == 0 {
            self.phase = WavePhase::Delay;
            self.last_wave_end_ms = now_ms;
            return Some(self.wave);
        }
        None
    }
}
