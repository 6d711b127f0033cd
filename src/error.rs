//! Error types for building scenarios and addressing bodies.
//!
//! The per-tick pipeline never fails; these only come out of construction,
//! configuration and input targeting.

use thiserror::Error;

/// Errors raised while setting up or driving a simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Half extents must be finite and non-negative on every axis.
    #[error("invalid half extents [{hx}, {hy}, {hz}] (must be finite and >= 0)")]
    InvalidHalfExtents { hx: f64, hy: f64, hz: f64 },

    /// A numeric parameter is outside its allowed range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A body cannot be placed inside the room's safe volume.
    #[error("body {index} with largest half extent {extent} does not fit a room of boundary {boundary}")]
    BodyTooLarge {
        index: usize,
        extent: f64,
        boundary: f64,
    },

    /// An explicit starting position puts part of the body outside the room.
    #[error("body {index} at {position} with half extent {half_extent} crosses the wall on axis {axis} (boundary {boundary})")]
    BodyOutsideRoom {
        index: usize,
        axis: usize,
        position: f64,
        half_extent: f64,
        boundary: f64,
    },

    /// The controlled body index does not exist.
    #[error("controlled body {index} out of range ({count} bodies)")]
    ControlledBodyOutOfRange { index: usize, count: usize },

    /// A body index does not exist.
    #[error("body index {index} out of range ({count} bodies)")]
    BodyIndexOutOfRange { index: usize, count: usize },
}
