//! Monotonic time sources for cooldown gating.

use std::time::Instant;

/// Millisecond clock read by auto-fire. Must never run backwards.
pub trait TimeSource {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> f64;

    /// Called once per unpaused tick with the frame duration.
    fn advance(&mut self, dt_ms: f64);
}

/// Clock driven purely by the frame deltas handed to `tick`.
///
/// Deterministic, and stops while the simulation is paused.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimeSource for FrameClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn advance(&mut self, dt_ms: f64) {
        // Negative or NaN deltas would break monotonicity.
        if dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
    }
}

/// Real elapsed time since construction. Ignores frame deltas.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn advance(&mut self, _dt_ms: f64) {}
}
