//! Game state and core simulation types
//!
//! The entire observable state of a run lives in [`GameState`]; the tick
//! pipeline is its only writer and hands out read-only snapshots.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::spawn::Spawn;

/// Discretized axis of current movement, derived each tick from the
/// direction vector's nonzero axis (x is checked before y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bearing {
    Horizontal,
    Vertical,
    /// No movement axis yet (before the first key press, or a zero vector)
    #[default]
    Unknown,
}

impl Bearing {
    /// Derive a bearing from a unit direction vector
    pub fn from_direction(dir: IVec2) -> Self {
        if dir.x != 0 {
            Bearing::Horizontal
        } else if dir.y != 0 {
            Bearing::Vertical
        } else {
            Bearing::Unknown
        }
    }
}

/// Per-tick movement delta, produced by the vector composer and consumed by
/// the fold. Not retained across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub delta: Vec2,
    pub bearing: Bearing,
}

impl Displacement {
    pub fn new(dx: f32, dy: f32, bearing: Bearing) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
            bearing,
        }
    }
}

/// Which liveness predicate ended the run. The gate runs bounds before
/// collision, so the first failure encountered is the one recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    OutOfBounds,
    SelfCollision,
}

/// Complete game state for one run
///
/// The trail holds every corner plus the current head, oldest first. It is
/// non-empty from construction onward; only the head is ever touched within
/// a tick, everything before it is frozen history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Rider icon, for presentation only
    pub icon: String,
    /// Trail color as a hex string, for presentation only
    pub color: String,
    /// False once the cycle left the field or hit its own trail
    pub alive: bool,
    /// Axis of the most recent movement
    pub bearing: Bearing,
    /// Set when `alive` flips to false, never cleared
    pub cause_of_death: Option<DeathCause>,
    /// Turn points plus current head, oldest first
    pub points: Vec<Vec2>,
}

impl GameState {
    /// Create a fresh state from a spawn: a single-point trail, no bearing,
    /// alive.
    pub fn new(spawn: Spawn) -> Self {
        Self {
            icon: spawn.icon.to_string(),
            color: spawn.color,
            alive: true,
            bearing: Bearing::Unknown,
            cause_of_death: None,
            points: vec![spawn.point],
        }
    }

    /// Current head of the trail (the only mutable point)
    pub fn head(&self) -> Vec2 {
        debug_assert!(!self.points.is_empty(), "trail must never be empty");
        self.points.last().copied().unwrap_or(Vec2::ZERO)
    }
}
