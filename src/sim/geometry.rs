//! Geometry predicates for the liveness gate, plus the spawn-point helper
//!
//! Pure functions over play-field coordinates. The field spans
//! `[0, width) x [0, height)` with the origin at the top-left.

use glam::Vec2;
use rand::Rng;

/// True if the point lies outside the play field.
///
/// The field is half-open: `x == width` or `y == height` is already out.
#[inline]
pub fn is_out_of_bounds(x: f32, y: f32, width: f32, height: f32) -> bool {
    x < 0.0 || x >= width || y < 0.0 || y >= height
}

/// True if `(x, y)` lies within `tolerance` of any point in `path`.
///
/// The path holds only corners, not every traversed pixel, so the test is a
/// radius check rather than exact equality.
pub fn is_collision(x: f32, y: f32, tolerance: f32, path: &[Vec2]) -> bool {
    let head = Vec2::new(x, y);
    path.iter()
        .any(|p| p.distance_squared(head) <= tolerance * tolerance)
}

/// Random coordinate in `[0, max)`
pub fn random_point<R: Rng>(rng: &mut R, max: f32) -> f32 {
    rng.random_range(0.0..max)
}
