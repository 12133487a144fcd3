//! Per-tick state fold and liveness gate
//!
//! [`reduce`] is the only place trail topology changes; the gate predicates
//! only ever flip `alive` from true to false. [`tick`] composes them in the
//! fixed order the pipeline requires: fold, bounds, collision.

use crate::settings::Config;

use super::geometry::{is_collision, is_out_of_bounds};
use super::state::{Bearing, DeathCause, Displacement, GameState};

/// Fold one displacement into the state.
///
/// A turn (displacement bearing differs from the state bearing and is not
/// `Unknown`) appends the new head, freezing the old one as a permanent
/// corner. Straight-line movement replaces the head in place, extending the
/// last segment. An `Unknown` bearing never counts as a turn: a zero
/// displacement continues the current heading.
pub fn reduce(state: &mut GameState, disp: Displacement) {
    let next = state.head() + disp.delta;
    let turned = disp.bearing != state.bearing && disp.bearing != Bearing::Unknown;
    if state.points.is_empty() || turned {
        state.points.push(next);
    } else {
        let last = state.points.len() - 1;
        state.points[last] = next;
    }
    state.bearing = disp.bearing;
}

/// Kill the state if the head left the play field. No-op once dead.
pub fn check_bounds(state: &mut GameState, width: f32, height: f32) {
    if !state.alive {
        return;
    }
    let head = state.head();
    if is_out_of_bounds(head.x, head.y, width, height) {
        state.alive = false;
        state.cause_of_death = Some(DeathCause::OutOfBounds);
    }
}

/// Kill the state if the head ran into the trail's own history. No-op once
/// dead, which also short-circuits the O(n) scan when the bounds check
/// already fired this tick.
///
/// A trail of one or two points cannot self-intersect yet (the first
/// segment always trivially touches its own origin), so those states pass
/// unconditionally. The corner that starts the head's own segment is also
/// exempt: right after a turn the head sits a single tick's displacement
/// from it, well inside the tolerance radius, and with 180° reversals
/// suppressed at the steering stage it can never legitimately be hit.
pub fn check_collision(state: &mut GameState, tolerance: f32) {
    if !state.alive || state.points.len() <= 2 {
        return;
    }
    let head = state.head();
    let history = &state.points[..state.points.len() - 2];
    if is_collision(head.x, head.y, tolerance, history) {
        state.alive = false;
        state.cause_of_death = Some(DeathCause::SelfCollision);
    }
}

/// Advance the state by one tick: fold the displacement, then run the
/// liveness gate (bounds before collision).
///
/// Dead states are frozen: the trail stops moving and the same state keeps
/// being emitted until the host tears the clock down.
pub fn tick(state: &mut GameState, disp: Displacement, config: &Config) {
    if !state.alive {
        return;
    }
    reduce(state, disp);
    check_bounds(state, config.width, config.height);
    check_collision(state, config.collision_tolerance);
    if !state.alive {
        log::info!(
            "{} crashed at {:?}: {:?}",
            state.icon,
            state.head(),
            state.cause_of_death
        );
    }
}
