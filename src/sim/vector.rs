//! Vector composer: latest speed x latest direction -> per-tick displacement
//!
//! The speed and direction streams update independently and at different
//! rates (speed once per frame, direction whenever a key lands). The
//! composer holds the latest value of each and is sampled exactly once per
//! tick, so physics and rendering stay locked to the frame rate no matter
//! how fast input arrives. Nothing is emitted until both inputs have arrived
//! at least once: the cycle stands still until the first key press.

use glam::IVec2;

use super::state::{Bearing, Displacement};

/// Latest-value join of the speed and direction inputs
#[derive(Debug, Clone, Default)]
pub struct VectorComposer {
    speed: Option<f32>,
    direction: Option<IVec2>,
}

impl VectorComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the latest speed (pixels for this tick's elapsed interval)
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = Some(speed);
    }

    /// Update the latest direction unit vector
    pub fn set_direction(&mut self, direction: IVec2) {
        self.direction = Some(direction);
    }

    /// Sample the join at a tick boundary.
    ///
    /// `None` until both inputs have been set at least once.
    pub fn sample(&self) -> Option<Displacement> {
        let speed = self.speed?;
        let dir = self.direction?;
        Some(Displacement::new(
            speed * dir.x as f32,
            speed * dir.y as f32,
            Bearing::from_direction(dir),
        ))
    }
}
