//! Build fully-initialized room scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - driver settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System`: bodies, room, tick counter)
//!
//! Bodies without an explicit position are dropped at a random point of the
//! room's safe sub-volume, bodies without a velocity get a random one; both
//! draw from a `StdRng` seeded with `engine.seed`, so a given config always
//! yields the same initial state.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::input::InputQueue;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, Rgb, Room, Shape, System};
use crate::simulation::step::{step, StepReport};

/// Read-only view of one body handed to a renderer after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: NVec3,
    pub shape: Shape,
    pub half_extents: NVec3,
    pub color: Rgb,
}

/// Runtime bundle: owns the body arena between ticks
#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        cfg.validate()?;

        let mut rng = StdRng::seed_from_u64(cfg.engine.seed);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            gravity: p_cfg.gravity,
            damping: p_cfg.damping,
            restitution: p_cfg.restitution,
            thrust: p_cfg.thrust,
            jump_factor: p_cfg.jump_factor,
            spawn_speed: p_cfg.spawn_speed,
            spawn_margin: p_cfg.spawn_margin,
        };
        let room = Room::from_size(p_cfg.room_size);

        // Bodies: map `BodyConfig` -> runtime `Body`, filling gaps from the rng
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| spawn_body(bc, &room, &parameters, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            tick_period: Duration::from_millis(cfg.engine.tick_ms),
            controlled_body: cfg.engine.controlled_body,
            seed: cfg.engine.seed,
        };

        info!(
            bodies = bodies.len(),
            boundary = room.boundary,
            seed = engine.seed,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies, room),
        })
    }

    /// The reference room: three spheres with fixed starting state and ten
    /// other shapes placed at random
    pub fn default_room(seed: u64) -> Result<Self, SimError> {
        Self::build_scenario(default_room_config(seed))
    }

    /// Advance one tick
    pub fn step(&mut self) -> StepReport {
        step(&mut self.system, &self.parameters)
    }

    /// Apply queued input to the controlled body, then advance one tick
    pub fn tick(&mut self, inputs: &mut InputQueue) -> Result<StepReport, SimError> {
        if !inputs.is_empty() {
            inputs.drain_into(&mut self.system.bodies, self.engine.controlled_body, &self.parameters)?;
        }
        Ok(self.step())
    }

    /// Snapshot for drawing
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyView {
                position: b.position,
                shape: b.shape(),
                half_extents: *b.half_extents(),
                color: b.color(),
            })
            .collect()
    }

    pub fn controlled_body(&self) -> Option<&Body> {
        self.system.bodies.get(self.engine.controlled_body)
    }
}

fn spawn_body(bc: &BodyConfig, room: &Room, params: &Parameters, rng: &mut StdRng) -> Result<Body, SimError> {
    let half = NVec3::from(bc.half_extents);

    let position = match bc.x {
        Some(x) => NVec3::from(x),
        None => {
            let s = room.safe_range(&half, params.spawn_margin);
            NVec3::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s), rng.gen_range(-s..=s))
        }
    };

    let velocity = match bc.v {
        Some(v) => NVec3::from(v),
        None => {
            let s = params.spawn_speed;
            NVec3::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s), rng.gen_range(-s..=s))
        }
    };

    Ok(Body::new(bc.shape, half, position, bc.color)?.with_velocity(velocity))
}

/// Config of the reference room
pub fn default_room_config(seed: u64) -> ScenarioConfig {
    let fixed = |shape, h: f64, color, x, v| BodyConfig {
        shape,
        half_extents: [h, h, h],
        color,
        x: Some(x),
        v: Some(v),
    };
    let random = |shape, half_extents, color| BodyConfig {
        shape,
        half_extents,
        color,
        x: None,
        v: None,
    };

    let bodies = vec![
        fixed(Shape::Sphere, 0.8, [1.0, 0.0, 0.0], [2.0, 3.0, 0.0], [0.5, 0.5, 0.5]),
        fixed(Shape::Sphere, 0.6, [0.0, 0.0, 1.0], [-2.0, -3.0, 0.0], [-0.6, 0.3, 0.7]),
        fixed(Shape::Sphere, 0.4, [0.0, 1.0, 0.0], [0.0, 0.0, 3.0], [0.8, -0.4, 0.1]),
        random(Shape::Box, [0.6, 0.6, 0.6], [1.0, 0.5, 0.0]),
        random(Shape::TallBox, [0.3, 1.5, 0.3], [0.8, 0.2, 0.8]),
        random(Shape::WidePanel, [2.0, 0.2, 0.5], [0.2, 0.8, 0.8]),
        random(Shape::ThinWall, [0.1, 2.0, 1.5], [0.5, 0.5, 0.5]),
        random(Shape::CylinderV, [0.7, 1.2, 0.7], [0.7, 0.7, 0.2]),
        random(Shape::CylinderH, [1.2, 0.7, 0.7], [1.0, 0.2, 0.2]),
        random(Shape::Cone, [0.8, 1.0, 0.8], [0.0, 0.5, 1.0]),
        random(Shape::Pyramid, [1.0, 1.0, 1.0], [0.5, 0.0, 0.5]),
        random(Shape::Octahedron, [0.7, 0.7, 0.7], [0.0, 1.0, 0.5]),
        random(Shape::Disc, [1.5, 0.1, 1.5], [0.9, 0.9, 0.9]),
    ];

    ScenarioConfig {
        engine: EngineConfig {
            seed,
            ..EngineConfig::default()
        },
        parameters: ParametersConfig::default(),
        bodies,
    }
}
