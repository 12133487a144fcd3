//! Clock/velocity stage: monotonic timestamps to per-tick speed
//!
//! The host drives the simulation with a timestamp per frame. This stage
//! diffs consecutive timestamps and scales the configured velocity by real
//! elapsed time, so the cycle covers the same distance per wall-clock second
//! regardless of frame pacing.

/// Pairwise timestamp differencing and speed derivation
#[derive(Debug, Clone)]
pub struct VelocityStage {
    /// Configured velocity in pixels/second
    velocity: f32,
    last_ms: Option<f64>,
}

impl VelocityStage {
    pub fn new(velocity: f32) -> Self {
        Self {
            velocity,
            last_ms: None,
        }
    }

    /// Feed the timestamp for this tick; returns the scalar speed in pixels
    /// for the elapsed interval.
    ///
    /// The very first sample returns `None` (nothing to diff against).
    /// Duplicate timestamps yield a speed of zero.
    pub fn sample(&mut self, now_ms: f64) -> Option<f32> {
        let speed = self
            .last_ms
            .map(|prev| self.velocity * ((now_ms - prev) as f32) / 1000.0);
        self.last_ms = Some(now_ms);
        speed
    }
}
