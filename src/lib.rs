//! Light Cycle - a snake/light-cycle trail game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock sampling, steering, trail fold, liveness)
//! - `spawn`: Random appearance/spawn-point provider
//! - `game`: Host-facing wiring of the per-frame pipeline
//!
//! The simulation is pure and platform-free: the host feeds key codes and
//! monotonic timestamps in, and receives one [`sim::GameState`] snapshot per
//! tick out. Rendering lives entirely behind [`game::SceneSink`].

pub mod game;
pub mod settings;
pub mod sim;
pub mod spawn;

pub use game::{Game, SceneSink};
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Play-field width in pixels
    pub const PLAY_WIDTH: f32 = 500.0;
    /// Play-field height in pixels
    pub const PLAY_HEIGHT: f32 = 400.0;
    /// Simulation tick rate (frames/second)
    pub const FRAME_RATE: u32 = 60;
    /// Cycle velocity (pixels/second)
    pub const VELOCITY: f32 = 100.0;
    /// Radius around a recorded trail point that counts as a self-hit.
    /// Trail points are only recorded at turns, not every pixel, so exact
    /// coordinate equality would almost never trigger.
    pub const COLLISION_TOLERANCE: f32 = 2.0;
}
