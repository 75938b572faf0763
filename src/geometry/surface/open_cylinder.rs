use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// The side wall of a cylinder centred at the origin, axis along Y.
///
/// `u` sweeps the angle and `v` runs from `-h/2` to `h/2`.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCylinder {
    radius: f64,
    height: f64,
}

impl OpenCylinder {
    /// Creates a new cylinder wall.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive or non-finite.
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        Ok(Self {
            radius: require_positive("cylinder radius", radius)?,
            height: require_positive("cylinder height", height)?,
        })
    }

    /// Returns the radius.
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

impl Surface for OpenCylinder {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let angle = u * TAU;
        Point3::new(
            self.radius * angle.sin(),
            (v - 0.5) * self.height,
            self.radius * angle.cos(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centred_on_origin() {
        let c = OpenCylinder::new(25.0, 90.0).unwrap();
        assert_relative_eq!(c.evaluate(0.0, 0.0).y, -45.0, epsilon = 1e-12);
        assert_relative_eq!(c.evaluate(0.0, 1.0).y, 45.0, epsilon = 1e-12);
        let p = c.evaluate(0.25, 0.5);
        assert_relative_eq!(p.x, 25.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_flat_cylinder() {
        assert!(OpenCylinder::new(25.0, 0.0).is_err());
    }
}
