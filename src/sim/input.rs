//! Steering input: raw key codes to unit direction vectors
//!
//! [`Steering`] is the only stateful piece of input handling. It remembers
//! the current heading so that a key repeat or an instant 180° reversal
//! (which would drive the cycle straight into its own trail) is dropped
//! before it ever reaches the composer.

use glam::IVec2;

/// Raw key codes the mapper recognizes (browser `keyCode` values)
pub mod keys {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

/// Map a raw key code to a unit direction vector.
///
/// Exactly one axis is nonzero for a recognized key; unrecognized codes
/// degrade silently to the zero vector. The y axis grows downward.
pub fn direction_for_key(code: u32) -> IVec2 {
    match code {
        keys::LEFT => IVec2::new(-1, 0),
        keys::UP => IVec2::new(0, -1),
        keys::RIGHT => IVec2::new(1, 0),
        keys::DOWN => IVec2::new(0, 1),
        _ => IVec2::ZERO,
    }
}

/// Current-heading holder with reversal/repeat suppression
#[derive(Debug, Clone, Default)]
pub struct Steering {
    current: IVec2,
}

impl Steering {
    pub fn new() -> Self {
        Self::default()
    }

    /// The heading last accepted, zero before any key press
    pub fn current(&self) -> IVec2 {
        self.current
    }

    /// Feed a raw key event. Returns the new heading if the event changes
    /// it, `None` if the key is unrecognized, a repeat of the current
    /// heading, or its exact opposite.
    pub fn accept(&mut self, code: u32) -> Option<IVec2> {
        let dir = direction_for_key(code);
        if dir == IVec2::ZERO || dir == self.current || dir == -self.current {
            return None;
        }
        self.current = dir;
        Some(dir)
    }
}
