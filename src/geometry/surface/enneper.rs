use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// Enneper's minimal surface over the square `[-1, 1]^2`, uniformly scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Enneper {
    scale: f64,
}

impl Enneper {
    /// Creates an Enneper surface with the given output scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is non-positive or non-finite.
    pub fn new(scale: f64) -> Result<Self> {
        Ok(Self {
            scale: require_positive("enneper scale", scale)?,
        })
    }
}

impl Default for Enneper {
    fn default() -> Self {
        Self { scale: 5.0 }
    }
}

impl Surface for Enneper {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let s = (u - 0.5) * 2.0;
        let t = (v - 0.5) * 2.0;
        let x = s - s.powi(3) / 3.0 + s * t * t;
        let y = t - t.powi(3) / 3.0 + t * s * s;
        let z = s * s - t * t;
        Point3::new(x * self.scale, y * self.scale, z * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_is_origin() {
        let p = Enneper::default().evaluate(0.5, 0.5);
        assert!(p.coords.norm() < 1e-12);
    }

    #[test]
    fn corner_values() {
        // s = t = 1: x = y = 1 - 1/3 + 1, z = 0
        let p = Enneper::default().evaluate(1.0, 1.0);
        assert_relative_eq!(p.x, 5.0 * 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, p.x, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn saddle_signs() {
        let e = Enneper::default();
        assert!(e.evaluate(1.0, 0.5).z > 0.0);
        assert!(e.evaluate(0.5, 1.0).z < 0.0);
    }
}
