use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// A hyperboloid of one sheet around the z-axis.
///
/// `P(u, v) = (a cosh(s) cos(t), b cosh(s) sin(t), c sinh(s))`
/// with `s = 2(u - 0.5)` in `[-1, 1]` and `t = 2 pi v`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperboloid {
    a: f64,
    b: f64,
    c: f64,
}

impl Hyperboloid {
    /// Creates a new hyperboloid with semi-axes `a`, `b` (waist) and `c` (height).
    ///
    /// # Errors
    ///
    /// Returns an error if any semi-axis is non-positive or non-finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        Ok(Self {
            a: require_positive("hyperboloid a", a)?,
            b: require_positive("hyperboloid b", b)?,
            c: require_positive("hyperboloid c", c)?,
        })
    }

    /// Returns the waist semi-axes `(a, b)`.
    #[must_use]
    pub fn waist(&self) -> (f64, f64) {
        (self.a, self.b)
    }
}

impl Default for Hyperboloid {
    fn default() -> Self {
        Self {
            a: 5.0,
            b: 5.0,
            c: 10.0,
        }
    }
}

impl Surface for Hyperboloid {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let s = (u - 0.5) * 2.0;
        let t = v * TAU;
        Point3::new(
            self.a * s.cosh() * t.cos(),
            self.b * s.cosh() * t.sin(),
            self.c * s.sinh(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn waist_point_at_zero_angle() {
        // u = 0.5 maps to s = 0, the narrowest circle.
        let p = Hyperboloid::default().evaluate(0.5, 0.0);
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn ends_are_symmetric() {
        let h = Hyperboloid::default();
        let lo = h.evaluate(0.0, 0.25);
        let hi = h.evaluate(1.0, 0.25);
        assert_relative_eq!(lo.y, hi.y, epsilon = 1e-12);
        assert_relative_eq!(lo.z, -hi.z, epsilon = 1e-12);
        assert_relative_eq!(hi.z, 10.0 * 1.0_f64.sinh(), epsilon = 1e-12);
    }

    #[test]
    fn custom_semi_axes() {
        let h = Hyperboloid::new(2.0, 3.0, 1.0).unwrap();
        assert_eq!(h.waist(), (2.0, 3.0));
        let p = h.evaluate(0.5, 0.25);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_zero_axis() {
        assert!(Hyperboloid::new(0.0, 5.0, 10.0).is_err());
        assert!(Hyperboloid::new(5.0, 5.0, -1.0).is_err());
    }
}
