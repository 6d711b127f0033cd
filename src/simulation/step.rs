//! One discrete simulation tick
//!
//! Per body: integrate, then wall contact. After every body has moved,
//! one pass of pairwise contact over all unordered pairs.

use tracing::debug;

use super::boundary::resolve_boundary;
use super::collision::{resolve_collisions, CollisionStats};
use super::integrator::integrate_body;
use super::params::Parameters;
use super::states::System;

/// Counters for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,           // tick number just completed
    pub wall_hits: u32,      // axis clamps applied by the boundary pass
    pub pairs: CollisionStats,
}

/// Advance the whole system by one tick
pub fn step(sys: &mut System, params: &Parameters) -> StepReport {
    let room = sys.room;
    let mut wall_hits = 0;

    for b in sys.bodies.iter_mut() {
        integrate_body(b, params.gravity);
        wall_hits += resolve_boundary(b, &room, params.damping);
    }

    let pairs = resolve_collisions(&mut sys.bodies, params.restitution);

    sys.tick += 1;

    if pairs.contacts > 0 {
        debug!(tick = sys.tick, wall_hits, contacts = pairs.contacts, impulses = pairs.impulses, "step");
    }

    StepReport {
        tick: sys.tick,
        wall_hits,
        pairs,
    }
}
