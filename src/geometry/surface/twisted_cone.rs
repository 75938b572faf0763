use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{require_positive, Surface};

/// A cone whose rim oscillates along z as it winds around the axis.
///
/// `r = radius * u`, `t = 2 pi v`; `P = (r cos t, r sin t, r sin(lobes * t))`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistedCone {
    radius: f64,
    lobes: u32,
}

impl TwistedCone {
    /// Creates a twisted cone with rim `radius` and `lobes` z-oscillations per turn.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is non-positive or `lobes` is zero.
    pub fn new(radius: f64, lobes: u32) -> Result<Self> {
        if lobes == 0 {
            return Err(
                GeometryError::Degenerate("twisted cone needs at least one lobe".into()).into(),
            );
        }
        Ok(Self {
            radius: require_positive("twisted cone radius", radius)?,
            lobes,
        })
    }
}

impl Default for TwistedCone {
    fn default() -> Self {
        Self {
            radius: 5.0,
            lobes: 3,
        }
    }
}

impl Surface for TwistedCone {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let r = u * self.radius;
        let theta = v * TAU;
        Point3::new(
            r * theta.cos(),
            r * theta.sin(),
            r * (f64::from(self.lobes) * theta).sin(),
        )
    }
}
