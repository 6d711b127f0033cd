//! Fixed-tick integrator for a single body
//!
//! Semi-implicit Euler with gravity pre-scaled to one tick: the vertical
//! velocity gets `gravity` added once, then the position advances by the
//! updated velocity

use super::states::Body;

/// Advance one body by one tick under `gravity` (negative, along +y up)
pub fn integrate_body(body: &mut Body, gravity: f64) {
    // Kick: v_y += g
    body.velocity.y += gravity;

    // Drift with the new velocity: x += v
    body.position += body.velocity;
}

