//! Whole-system observables used for logging and tests

use super::states::{NVec3, System};

/// Total kinetic energy, sum of 1/2 m |v|^2
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.norm_squared())
        .sum()
}

/// Total linear momentum, sum of m v
pub fn momentum(sys: &System) -> NVec3 {
    sys.bodies
        .iter()
        .fold(NVec3::zeros(), |acc, b| acc + b.velocity * b.mass())
}

/// Indices of bodies outside their allowed span on any axis
pub fn escaped_bodies(sys: &System, tol: f64) -> Vec<usize> {
    sys.bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| !sys.room.contains(b, tol))
        .map(|(i, _)| i)
        .collect()
}
