//! Core state types for the room simulation.
//!
//! Defines the body arena and its static boundary:
//! - `Shape` closed set of render/volume selectors
//! - `Body`  a single movable entity with derived mass and bounding radius
//! - `Room`  cubic boundary centered at the origin
//! - `System` the bodies, the room and the tick counter
//!
//! Only `position` and `velocity` mutate after construction.

use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Linear RGB color, owned by the renderer and ignored by the physics
pub type Rgb = [f32; 3];

/// Shape tag of a body
/// Selects the volume formula for mass and the mesh a renderer draws;
/// collision treats every shape as its bounding sphere
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Sphere,
    Box,
    TallBox,
    WidePanel,
    ThinWall,
    FloorPlate,
    CylinderV,
    CylinderH,
    Cone,
    Pyramid,
    Octahedron,
    Disc,
}

impl Shape {
    pub const ALL: [Shape; 12] = [
        Shape::Sphere,
        Shape::Box,
        Shape::TallBox,
        Shape::WidePanel,
        Shape::ThinWall,
        Shape::FloorPlate,
        Shape::CylinderV,
        Shape::CylinderH,
        Shape::Cone,
        Shape::Pyramid,
        Shape::Octahedron,
        Shape::Disc,
    ];

    /// Volume of this shape for the given half extents
    ///
    /// - sphere: 4/3 π hx³
    /// - box family, pyramid, octahedron: 8 hx hy hz (bounding box volume)
    /// - cylinder_v / disc: π hx² (2 hy)
    /// - cylinder_h: π hy² (2 hx), lying along x
    /// - cone: 1/3 π hx² (2 hy)
    pub fn volume(self, half_extents: &NVec3) -> f64 {
        let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);
        match self {
            Shape::Sphere => (4.0 / 3.0) * PI * hx.powi(3),
            Shape::Box | Shape::TallBox | Shape::WidePanel | Shape::ThinWall | Shape::FloorPlate => {
                8.0 * hx * hy * hz
            }
            Shape::CylinderV | Shape::Disc => PI * hx * hx * (2.0 * hy),
            Shape::CylinderH => PI * hy * hy * (2.0 * hx),
            Shape::Cone => (1.0 / 3.0) * PI * hx * hx * (2.0 * hy),
            Shape::Pyramid | Shape::Octahedron => 8.0 * hx * hy * hz,
        }
    }
}

/// Mass of a body whose volume is degenerate
pub const FALLBACK_MASS: f64 = 1.0;

/// A single movable body
///
/// `mass` and `bounding_radius` are derived once in [`Body::new`] and are
/// read-only afterwards; `mass > 0` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec3, // center
    pub velocity: NVec3, // units per tick
    half_extents: NVec3,
    shape: Shape,
    color: Rgb,
    bounding_radius: f64,
    mass: f64,
}

impl Body {
    /// Build a body at rest, deriving mass (unit density) and bounding radius
    pub fn new(shape: Shape, half_extents: NVec3, position: NVec3, color: Rgb) -> Result<Self, SimError> {
        if half_extents.iter().any(|h| !h.is_finite() || *h < 0.0) {
            return Err(SimError::InvalidHalfExtents {
                hx: half_extents.x,
                hy: half_extents.y,
                hz: half_extents.z,
            });
        }

        let bounding_radius = half_extents.norm();
        let volume = shape.volume(&half_extents);
        let mass = if volume > 0.0 { volume } else { FALLBACK_MASS };

        Ok(Self {
            position,
            velocity: NVec3::zeros(),
            half_extents,
            shape,
            color,
            bounding_radius,
            mass,
        })
    }

    /// Builder-style initial velocity
    pub fn with_velocity(mut self, velocity: NVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn half_extents(&self) -> &NVec3 {
        &self.half_extents
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Radius of the sphere enclosing the half extents
    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f64 {
        self.mass.recip()
    }
}

/// Static cube of half-size `boundary` centered at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub boundary: f64,
}

impl Room {
    /// Room from its full edge length
    pub fn from_size(size: f64) -> Self {
        Self { boundary: size / 2.0 }
    }

    /// Half-width of the cube a body center may be spawned in without touching a wall
    pub fn safe_range(&self, half_extents: &NVec3, margin: f64) -> f64 {
        self.boundary - half_extents.max() - margin
    }

    /// True when every axis satisfies `|position| <= boundary - half_extent` (within `tol`)
    pub fn contains(&self, body: &Body, tol: f64) -> bool {
        (0..3).all(|axis| body.position[axis].abs() <= self.boundary - body.half_extents[axis] + tol)
    }
}

/// Body arena plus the room; iteration order is the insertion order
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub room: Room,        // static boundary
    pub tick: u64,         // completed steps
}

impl System {
    pub fn new(bodies: Vec<Body>, room: Room) -> Self {
        Self { bodies, room, tick: 0 }
    }
}
