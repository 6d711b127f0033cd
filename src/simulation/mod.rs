pub mod states;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod boundary;
pub mod collision;
pub mod step;
pub mod input;
pub mod diagnostics;
pub mod scenario;
