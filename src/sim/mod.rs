//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick pipeline only (velocity, composition, fold, liveness gate)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;
pub mod vector;

pub use clock::VelocityStage;
pub use geometry::{is_collision, is_out_of_bounds, random_point};
pub use input::{Steering, direction_for_key, keys};
pub use state::{Bearing, DeathCause, Displacement, GameState};
pub use tick::{check_bounds, check_collision, reduce, tick};
pub use vector::VectorComposer;
