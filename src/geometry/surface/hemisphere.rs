use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::Result;
use crate::math::Point3;

use super::{require_positive, Surface};

/// The upper half of a sphere centred at the origin, pole on +Y.
///
/// `phi = 2 pi u` sweeps around Y and `theta = (pi / 2) v` runs from the
/// pole down to the equator:
/// `P = (-r cos(phi) sin(theta), r cos(theta), r sin(phi) sin(theta))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hemisphere {
    radius: f64,
}

impl Hemisphere {
    /// Creates a hemisphere of the given radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is non-positive or non-finite.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: require_positive("hemisphere radius", radius)?,
        })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Hemisphere {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let phi = u * TAU;
        let theta = v * FRAC_PI_2;
        Point3::new(
            -self.radius * phi.cos() * theta.sin(),
            self.radius * theta.cos(),
            self.radius * phi.sin() * theta.sin(),
        )
    }
}
