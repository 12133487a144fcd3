//! Game configuration
//!
//! All values are fixed at startup; there is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Play-field width in pixels
    pub width: f32,
    /// Play-field height in pixels
    pub height: f32,
    /// Tick rate in frames/second
    pub frame_rate: u32,
    /// Cycle velocity in pixels/second
    pub velocity: f32,
    /// Self-collision tolerance radius in pixels
    pub collision_tolerance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            frame_rate: FRAME_RATE,
            velocity: VELOCITY,
            collision_tolerance: COLLISION_TOLERANCE,
        }
    }
}

impl Config {
    /// Ideal milliseconds between ticks at the configured frame rate
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.frame_rate as f64
    }
}
