use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{require_positive, Surface};

/// A torus around the z-axis.
///
/// `P(u, v) = ((R + r cos(phi)) cos(theta), (R + r cos(phi)) sin(theta), r sin(phi))`
/// with `theta = 2 pi u` and `phi = 2 pi v`.
#[derive(Debug, Clone, PartialEq)]
pub struct Doughnut {
    major_radius: f64,
    minor_radius: f64,
}

impl Doughnut {
    /// Creates a new doughnut.
    ///
    /// # Arguments
    ///
    /// * `major_radius` - Distance from the axis to the tube center
    /// * `minor_radius` - Tube radius (must be less than the major radius)
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive or minor >= major.
    pub fn new(major_radius: f64, minor_radius: f64) -> Result<Self> {
        let major_radius = require_positive("doughnut major radius", major_radius)?;
        let minor_radius = require_positive("doughnut minor radius", minor_radius)?;
        if minor_radius >= major_radius {
            return Err(GeometryError::Degenerate(
                "doughnut minor radius must be less than major radius".into(),
            )
            .into());
        }
        Ok(Self {
            major_radius,
            minor_radius,
        })
    }

    /// Returns the major radius (axis to tube center).
    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor radius (tube radius).
    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }
}

impl Default for Doughnut {
    fn default() -> Self {
        Self {
            major_radius: 5.0,
            minor_radius: 2.0,
        }
    }
}

impl Surface for Doughnut {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let theta = u * TAU;
        let phi = v * TAU;
        let ring = self.major_radius + self.minor_radius * phi.cos();
        Point3::new(
            ring * theta.cos(),
            ring * theta.sin(),
            self.minor_radius * phi.sin(),
        )
    }
}
