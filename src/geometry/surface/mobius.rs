use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{require_positive, Surface};

/// A Möbius strip around the z-axis.
///
/// `u` runs across the strip (`t = 2u - 1` in `[-1, 1]`) and `v` along it
/// (`s = 2 pi v`):
///
/// `P = ((R + w t cos(s/2)) cos s, (R + w t cos(s/2)) sin s, w t sin(s/2))`
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    radius: f64,
    half_width: f64,
}

impl MobiusStrip {
    /// Creates a new Möbius strip.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-positive or the half-width
    /// reaches the centre radius (the strip would pass through the axis).
    pub fn new(radius: f64, half_width: f64) -> Result<Self> {
        let radius = require_positive("mobius radius", radius)?;
        let half_width = require_positive("mobius half width", half_width)?;
        if half_width >= radius {
            return Err(GeometryError::Degenerate(
                "mobius half width must be less than its radius".into(),
            )
            .into());
        }
        Ok(Self { radius, half_width })
    }

    /// Returns the centre-line radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the half-width of the strip.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }
}

impl Default for MobiusStrip {
    fn default() -> Self {
        Self {
            radius: 20.0,
            half_width: 5.0,
        }
    }
}

impl Surface for MobiusStrip {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let t = u * 2.0 - 1.0;
        let s = v * TAU;
        let offset = self.half_width * t;
        let r = self.radius + offset * (s / 2.0).cos();
        Point3::new(r * s.cos(), r * s.sin(), offset * (s / 2.0).sin())
    }
}
