//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravity already scaled to one tick (not multiplied by a dt),
//! - wall damping and pairwise restitution,
//! - input thrust and spawn settings
//!
//! The room size lives only on `System::room`.

/// Reference gravity per tick: 9.81 scaled by 0.01
pub const GRAVITY: f64 = -9.81 * 0.01;
pub const DAMPING: f64 = 0.90;
pub const RESTITUTION: f64 = 0.95;
pub const ROOM_SIZE: f64 = 12.0;
pub const THRUST: f64 = 0.5;
pub const JUMP_FACTOR: f64 = 5.0;
pub const SPAWN_SPEED: f64 = 0.6;
pub const SPAWN_MARGIN: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravity: f64,      // added to vy once per tick
    pub damping: f64,      // velocity retention on wall bounce
    pub restitution: f64,  // e in the pair impulse
    pub thrust: f64,       // horizontal input impulse
    pub jump_factor: f64,  // vertical thrust = thrust * jump_factor
    pub spawn_speed: f64,  // random initial speed bound per axis
    pub spawn_margin: f64, // gap kept from the walls at spawn
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            thrust: THRUST,
            jump_factor: JUMP_FACTOR,
            spawn_speed: SPAWN_SPEED,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}
