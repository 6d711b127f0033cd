//! Wall contact against the cubic room
//!
//! Each axis is checked independently every tick. A body poking through a
//! wall is clamped back onto it and its velocity on that axis is reflected
//! and scaled by `damping`, so corner hits are corrected on both axes at once.

use super::states::{Body, Room};

/// Clamp `body` inside `room`, reflecting and damping velocity per penetrated axis
///
/// Returns the number of wall contacts this tick.
pub fn resolve_boundary(body: &mut Body, room: &Room, damping: f64) -> u32 {
    let bound = room.boundary;
    let half = *body.half_extents();
    let mut hits = 0;

    for axis in 0..3 {
        let h = half[axis];

        if body.position[axis] + h > bound {
            body.position[axis] = bound - h;
            body.velocity[axis] *= -damping;
            hits += 1;
        }

        if body.position[axis] - h < -bound {
            body.position[axis] = -bound + h;
            body.velocity[axis] *= -damping;
            hits += 1;
        }
    }

    hits
}
