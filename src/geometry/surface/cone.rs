use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// A right circular cone standing on the XZ plane with its apex on +Y.
///
/// `P(u, v) = ((1 - u) R cos(2 pi v), u H, (1 - u) R sin(2 pi v))`,
/// so `u = 0` is the base rim and `u = 1` is the apex.
#[derive(Debug, Clone, PartialEq)]
pub struct Cone {
    radius: f64,
    height: f64,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments
    ///
    /// * `radius` - Base radius (must be positive)
    /// * `height` - Distance from base to apex (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive or non-finite.
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        Ok(Self {
            radius: require_positive("cone radius", radius)?,
            height: require_positive("cone height", height)?,
        })
    }

    /// Returns the base radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            radius: 5.0,
            height: 10.0,
        }
    }
}

impl Surface for Cone {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let angle = v * TAU;
        let r = (1.0 - u) * self.radius;
        Point3::new(r * angle.cos(), u * self.height, r * angle.sin())
    }
}
