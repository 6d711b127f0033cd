//! Input boundary for the steered body
//!
//! Input events are queued as they arrive and applied strictly between
//! ticks, so a step never observes a half-applied command.

use std::collections::VecDeque;

use tracing::warn;

use crate::error::SimError;

use super::params::Parameters;
use super::states::{Body, NVec3};

/// Discrete thrust commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    Left,    // vx -= thrust
    Right,   // vx += thrust
    Jump,    // vy += thrust * jump_factor
    Forward, // vz -= thrust (into the screen)
    Back,    // vz += thrust
}

impl Thrust {
    /// Velocity change this command produces
    pub fn delta_v(self, params: &Parameters) -> NVec3 {
        let t = params.thrust;
        match self {
            Thrust::Left => NVec3::new(-t, 0.0, 0.0),
            Thrust::Right => NVec3::new(t, 0.0, 0.0),
            Thrust::Jump => NVec3::new(0.0, t * params.jump_factor, 0.0),
            Thrust::Forward => NVec3::new(0.0, 0.0, -t),
            Thrust::Back => NVec3::new(0.0, 0.0, t),
        }
    }

    /// Apply to a body's velocity
    pub fn apply(self, body: &mut Body, params: &Parameters) {
        body.velocity += self.delta_v(params);
    }
}

/// FIFO of pending commands, drained before the next tick
#[derive(Debug, Default, Clone)]
pub struct InputQueue {
    pending: VecDeque<Thrust>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Thrust) {
        self.pending.push_back(cmd);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending command, in arrival order, to `bodies[target]`
    ///
    /// The queue is emptied even when `target` is missing.
    pub fn drain_into(&mut self, bodies: &mut [Body], target: usize, params: &Parameters) -> Result<usize, SimError> {
        let count = bodies.len();
        let Some(body) = bodies.get_mut(target) else {
            let dropped = self.pending.len();
            self.pending.clear();
            warn!(target, count, dropped, "input for missing body dropped");
            return Err(SimError::BodyIndexOutOfRange { index: target, count });
        };

        let mut applied = 0;
        while let Some(cmd) = self.pending.pop_front() {
            cmd.apply(body, params);
            applied += 1;
        }
        Ok(applied)
    }
}
