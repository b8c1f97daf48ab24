//! Geometric and mass-property value objects.

use serde::{Deserialize, Serialize};

/// A point or vector in model space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Creates a point from its three coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A placement transform: a 3x3 rotation (row vectors), a translation and a
/// uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation component.
    pub origin: Point3,
    /// First rotation row.
    pub x_axis: Point3,
    /// Second rotation row.
    pub y_axis: Point3,
    /// Third rotation row.
    pub z_axis: Point3,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform: no rotation, no translation, unit scale.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            origin: Point3::new(0.0, 0.0, 0.0),
            x_axis: Point3::new(1.0, 0.0, 0.0),
            y_axis: Point3::new(0.0, 1.0, 0.0),
            z_axis: Point3::new(0.0, 0.0, 1.0),
            scale: 1.0,
        }
    }
}

/// Model accuracy as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accuracy {
    /// The accuracy value.
    pub value: f64,
    /// Whether the value is relative (as opposed to absolute).
    pub relative: bool,
}

/// An inertia result, either a full tensor or its principal-axis vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Inertia {
    /// Full 3x3 inertia tensor, row major.
    Tensor([[f64; 3]; 3]),
    /// Principal-axis inertia vector.
    Vector([f64; 3]),
}

/// Mass-property computation results for a single model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Massprops {
    pub volume: f64,
    pub mass: f64,
    pub density: f64,
    pub surface_area: f64,
    /// Centre of gravity, when the engine reports one.
    pub centre_gravity: Option<Point3>,
    /// Inertia tensor about the centre of gravity.
    pub ctr_grav_inertia_tensor: Option<Inertia>,
    /// Inertia about the coordinate system.
    pub coord_sys_inertia: Option<Inertia>,
    /// Inertia tensor about the coordinate system.
    pub coord_sys_inertia_tensor: Option<Inertia>,
}
