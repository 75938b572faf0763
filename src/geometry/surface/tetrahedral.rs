use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// A pillow-like patch with tetrahedral symmetry over `[-1, 1]^2`.
///
/// All denominators are `sqrt(1 + ...)` and therefore at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tetrahedral {
    scale: f64,
}

impl Tetrahedral {
    /// Creates the surface with the given output scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is non-positive or non-finite.
    pub fn new(scale: f64) -> Result<Self> {
        Ok(Self {
            scale: require_positive("tetrahedral scale", scale)?,
        })
    }
}

impl Default for Tetrahedral {
    fn default() -> Self {
        Self { scale: 5.0 }
    }
}

impl Surface for Tetrahedral {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let s = u * 2.0 - 1.0;
        let t = v * 2.0 - 1.0;
        let x = t * (1.0 - s * s) / (1.0 + t * t).sqrt();
        let y = s * (1.0 - t * t) / (1.0 + s * s).sqrt();
        let z = (s * t) / (1.0 + s * s + t * t).sqrt();
        Point3::new(x * self.scale, y * self.scale, z * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corners_collapse_onto_z() {
        // s = t = 1: x = y = 0, z = 1 / sqrt(3)
        let p = Tetrahedral::default().evaluate(1.0, 1.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 5.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn edge_midpoint() {
        // s = 0, t = 1: x = 1 / sqrt(2)
        let p = Tetrahedral::default().evaluate(0.5, 1.0);
        assert_relative_eq!(p.x, 5.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }
}
