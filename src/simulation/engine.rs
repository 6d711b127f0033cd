//! High-level runtime driver settings
//!
//! Tick period, which body the input layer steers, and the placement seed
//! used when building a `Scenario`

use std::time::Duration;

/// Reference tick period
pub const TICK_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub tick_period: Duration,  // wall-clock time between steps
    pub controlled_body: usize, // body steered by input
    pub seed: u64,              // deterministic spawn seed
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(TICK_MS),
            controlled_body: 0,
            seed: 42,
        }
    }
}
