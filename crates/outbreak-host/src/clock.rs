//! Wall-clock frame timer.
//!
//! Measures the real time between frames and caps it so a stalled frame
//! (debugger, suspended laptop) cannot push hostiles and projectiles
//! through walls in a single step.

use std::time::Instant;

use outbreak_core::constants::MAX_FRAME_DT;

pub struct FrameClock {
    last_instant: Instant,
    max_dt: f64,
    pub frame_count: u64,
    /// Uncapped duration of the last frame in seconds.
    pub real_dt: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: f64) -> Self {
        Self {
            last_instant: Instant::now(),
            max_dt,
            frame_count: 0,
            real_dt: 0.0,
        }
    }

    /// Start a frame and return the seconds to simulate for it.
    pub fn begin_frame(&mut self) -> f64 {
        let now = Instant::now();
        self.real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.frame_count += 1;
        cap_frame_dt(self.real_dt, self.max_dt)
    }

    /// Forget the time spent since the last frame (after a restart or a
    /// long blocking call).
    pub fn reset(&mut self) {
        self.last_instant = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a measured frame duration into `[0, max_dt]`.
pub fn cap_frame_dt(real_dt: f64, max_dt: f64) -> f64 {
    if real_dt > max_dt {
        log::warn!(
            "Frame took {:.1}ms, capping step to {:.1}ms",
            real_dt * 1000.0,
            max_dt * 1000.0
        );
        max_dt
    } else {
        real_dt.max(0.0)
    }
}
