pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, Room, Shape, System, NVec3, Rgb};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::integrator::integrate_body;
pub use simulation::boundary::resolve_boundary;
pub use simulation::collision::{resolve_pair, resolve_collisions, PairOutcome, CollisionStats};
pub use simulation::step::{step, StepReport};
pub use simulation::input::{Thrust, InputQueue};
pub use simulation::scenario::{Scenario, BodyView, default_room_config};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::room_vis3d::run_3d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
