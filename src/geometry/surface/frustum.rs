use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// A truncated cone around +Y whose radius varies linearly with height.
///
/// `r(u) = R1 + (R2 - R1) u`, `P(u, v) = (r cos(2 pi v), u H, r sin(2 pi v))`.
/// `R1` is the radius at `u = 0`, `R2` at `u = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    start_radius: f64,
    end_radius: f64,
    height: f64,
}

impl Frustum {
    /// Creates a new frustum.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is non-positive or non-finite.
    pub fn new(start_radius: f64, end_radius: f64, height: f64) -> Result<Self> {
        Ok(Self {
            start_radius: require_positive("frustum start radius", start_radius)?,
            end_radius: require_positive("frustum end radius", end_radius)?,
            height: require_positive("frustum height", height)?,
        })
    }

    /// Radius of the cross-section at parameter `u`.
    #[must_use]
    pub fn radius_at(&self, u: f64) -> f64 {
        self.start_radius + (self.end_radius - self.start_radius) * u
    }
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            start_radius: 5.0,
            end_radius: 2.5,
            height: 10.0,
        }
    }
}

impl Surface for Frustum {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius_at(u);
        let angle = v * TAU;
        Point3::new(r * angle.cos(), u * self.height, r * angle.sin())
    }
}
