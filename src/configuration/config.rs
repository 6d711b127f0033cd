//! Configuration types for loading room scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver options (tick period, steered body, seed)
//! - [`ParametersConfig`] – physical constants and spawn settings
//! - [`BodyConfig`]       – shape, size, color and optional initial state per body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every `engine` and `parameters` field may be omitted and falls back to the
//! reference constants:
//!
//! ```yaml
//! engine:
//!   tick_ms: 10             # wall-clock period between steps
//!   controlled_body: 0      # body steered by the keyboard
//!   seed: 42                # placement seed
//!
//! parameters:
//!   gravity: -0.0981        # added to vy each tick
//!   damping: 0.9            # wall bounce retention
//!   restitution: 0.95       # body-body restitution
//!   room_size: 12.0         # full edge of the cubic room
//!
//! bodies:
//!   - shape: sphere
//!     half_extents: [0.8, 0.8, 0.8]
//!     color: [1.0, 0.0, 0.0]
//!     x: [2.0, 3.0, 0.0]
//!     v: [0.5, 0.5, 0.5]
//!   - shape: cone             # no x/v: random safe position and velocity
//!     half_extents: [0.8, 1.0, 0.8]
//!     color: [0.0, 0.5, 1.0]
//! ```

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::engine::TICK_MS;
use crate::simulation::params::{
    DAMPING, GRAVITY, JUMP_FACTOR, RESTITUTION, ROOM_SIZE, SPAWN_MARGIN, SPAWN_SPEED, THRUST,
};
use crate::simulation::states::{Rgb, Shape};

/// Driver configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub tick_ms: u64,           // period of the external clock driving `step`
    pub controlled_body: usize, // index of the body receiving thrust input
    pub seed: u64,              // seed for random placement of bodies without `x`/`v`
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            controlled_body: 0,
            seed: 42,
        }
    }
}

/// Physical constants and spawn settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: f64,      // per-tick velocity change along y
    pub damping: f64,      // wall bounce retention, in (0, 1]
    pub restitution: f64,  // body-body restitution, in [0, 1]
    pub room_size: f64,    // full edge length of the room
    pub thrust: f64,       // horizontal input thrust
    pub jump_factor: f64,  // vertical thrust multiplier
    pub spawn_speed: f64,  // random initial velocity bound per axis
    pub spawn_margin: f64, // gap kept from walls when spawning
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
            room_size: ROOM_SIZE,
            thrust: THRUST,
            jump_factor: JUMP_FACTOR,
            spawn_speed: SPAWN_SPEED,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub shape: Shape,             // render / volume selector
    pub half_extents: [f64; 3],   // hx, hy, hz
    #[serde(default = "default_color")]
    pub color: Rgb,               // cosmetic only
    #[serde(default)]
    pub x: Option<[f64; 3]>,      // initial position, random if absent
    #[serde(default)]
    pub v: Option<[f64; 3]>,      // initial velocity, random if absent
}

fn default_color() -> Rgb {
    [1.0, 1.0, 1.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // driver configuration
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants
    pub bodies: Vec<BodyConfig>, // bodies in arena order
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Check the ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SimError> {
        let p = &self.parameters;

        // Bevy's fixed timestep must be non-zero
        if self.engine.tick_ms == 0 {
            return Err(SimError::InvalidParameter {
                name: "tick_ms",
                value: 0.0,
                reason: "must be > 0",
            });
        }

        if !(p.room_size.is_finite() && p.room_size > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "room_size",
                value: p.room_size,
                reason: "must be finite and > 0",
            });
        }
        if !p.gravity.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "gravity",
                value: p.gravity,
                reason: "must be finite",
            });
        }
        if !(p.damping > 0.0 && p.damping <= 1.0) {
            return Err(SimError::InvalidParameter {
                name: "damping",
                value: p.damping,
                reason: "must be in (0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&p.restitution) {
            return Err(SimError::InvalidParameter {
                name: "restitution",
                value: p.restitution,
                reason: "must be in [0, 1]",
            });
        }
        if !p.thrust.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "thrust",
                value: p.thrust,
                reason: "must be finite",
            });
        }
        if !p.jump_factor.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "jump_factor",
                value: p.jump_factor,
                reason: "must be finite",
            });
        }
        if !(p.spawn_speed.is_finite() && p.spawn_speed >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "spawn_speed",
                value: p.spawn_speed,
                reason: "must be finite and >= 0",
            });
        }
        if !(p.spawn_margin.is_finite() && p.spawn_margin >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "spawn_margin",
                value: p.spawn_margin,
                reason: "must be finite and >= 0",
            });
        }

        let boundary = p.room_size / 2.0;
        for (index, bc) in self.bodies.iter().enumerate() {
            let extent = bc.half_extents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if extent + p.spawn_margin >= boundary {
                return Err(SimError::BodyTooLarge {
                    index,
                    extent,
                    boundary,
                });
            }

            if let Some(x) = bc.x {
                for axis in 0..3 {
                    let half_extent = bc.half_extents[axis];
                    let reach = x[axis].abs() + half_extent;
                    if reach.is_nan() || reach > boundary {
                        return Err(SimError::BodyOutsideRoom {
                            index,
                            axis,
                            position: x[axis],
                            half_extent,
                            boundary,
                        });
                    }
                }
            }
            if let Some(v) = bc.v {
                if let Some(&value) = v.iter().find(|c| !c.is_finite()) {
                    return Err(SimError::InvalidParameter {
                        name: "v",
                        value,
                        reason: "initial velocity must be finite",
                    });
                }
            }
        }

        let count = self.bodies.len();
        if count > 0 && self.engine.controlled_body >= count {
            return Err(SimError::ControlledBodyOutOfRange {
                index: self.engine.controlled_body,
                count,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - shape: tall_box\n    half_extents: [0.3, 1.5, 0.3]\n",
        )
        .unwrap();

        assert_eq!(cfg.engine, EngineConfig::default());
        assert_eq!(cfg.parameters, ParametersConfig::default());
        assert_eq!(cfg.bodies[0].shape, Shape::TallBox);
        assert_eq!(cfg.bodies[0].color, [1.0, 1.0, 1.0]);
        assert!(cfg.bodies[0].x.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let res = ScenarioConfig::from_yaml_str("bodies:\n  - shape: torus\n    half_extents: [1, 1, 1]\n");
        assert!(res.is_err());
    }

    #[test]
    fn damping_out_of_range() {
        let mut cfg = ScenarioConfig::from_yaml_str("bodies: []\n").unwrap();
        cfg.parameters.damping = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidParameter { name: "damping", .. })
        ));
    }

    #[test]
    fn out_of_range_parameters_are_named() {
        let cases: [(&str, fn(&mut ScenarioConfig)); 10] = [
            ("tick_ms", |c| c.engine.tick_ms = 0),
            ("room_size", |c| c.parameters.room_size = 0.0),
            ("room_size", |c| c.parameters.room_size = f64::INFINITY),
            ("gravity", |c| c.parameters.gravity = f64::NAN),
            ("restitution", |c| c.parameters.restitution = -0.1),
            ("restitution", |c| c.parameters.restitution = 1.2),
            ("thrust", |c| c.parameters.thrust = f64::NAN),
            ("jump_factor", |c| c.parameters.jump_factor = f64::INFINITY),
            ("spawn_speed", |c| c.parameters.spawn_speed = -0.6),
            ("spawn_margin", |c| c.parameters.spawn_margin = -0.1),
        ];

        for (expected, tweak) in cases {
            let mut cfg = ScenarioConfig::from_yaml_str("bodies: []\n").unwrap();
            assert!(cfg.validate().is_ok());
            tweak(&mut cfg);
            match cfg.validate() {
                Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("{expected}: expected InvalidParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_tick_period_rejected() {
        let cfg = ScenarioConfig::from_yaml_str("engine: { tick_ms: 0 }\nbodies: []\n").unwrap();
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidParameter { name: "tick_ms", .. })
        ));
    }

    #[test]
    fn non_finite_initial_velocity_rejected() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - shape: sphere\n    half_extents: [0.5, 0.5, 0.5]\n    v: [0.0, .nan, 0.0]\n",
        )
        .unwrap();
        assert!(matches!(cfg.validate(), Err(SimError::InvalidParameter { name: "v", .. })));
    }

    #[test]
    fn oversized_body_rejected() {
        let cfg = ScenarioConfig::from_yaml_str(
            "parameters:\n  room_size: 2.0\nbodies:\n  - shape: box\n    half_extents: [1.0, 0.2, 0.2]\n",
        )
        .unwrap();
        assert!(matches!(cfg.validate(), Err(SimError::BodyTooLarge { index: 0, .. })));
    }

    #[test]
    fn controlled_body_must_exist() {
        let cfg = ScenarioConfig::from_yaml_str(
            "engine:\n  controlled_body: 3\nbodies:\n  - shape: sphere\n    half_extents: [0.5, 0.5, 0.5]\n",
        )
        .unwrap();
        assert_eq!(
            cfg.validate(),
            Err(SimError::ControlledBodyOutOfRange { index: 3, count: 1 })
        );
    }
}
