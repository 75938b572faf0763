use std::f64::consts::{PI, TAU};

use crate::math::Point3;

use super::Surface;

/// A Klein bottle immersion, split into the bulb (`s < pi`) and the handle.
///
/// With `s = 4 pi u`, `t = 2 pi v` and `w = 2 (1 - cos(s) / 2)`:
///
/// - bulb: `x = 3 cos s (1 + sin s) + w cos s cos t`, `y = 8 sin s + w sin s cos t`
/// - handle: `x = 3 cos s (1 + sin s) + w cos(t + pi)`, `y = 8 sin s`
///
/// and `z = w sin t` on both branches. The parameter `s` sweeps the loop
/// twice, so the handle branch covers `s` in `[pi, 4 pi]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KleinBottle;

impl KleinBottle {
    /// Creates the Klein bottle.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Surface for KleinBottle {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let s = u * TAU * 2.0;
        let t = v * TAU;
        let (ss, cs) = s.sin_cos();
        let w = 2.0 * (1.0 - cs / 2.0);
        let (x, y) = if s < PI {
            (
                3.0 * cs * (1.0 + ss) + w * cs * t.cos(),
                8.0 * ss + w * ss * t.cos(),
            )
        } else {
            (3.0 * cs * (1.0 + ss) + w * (t + PI).cos(), 8.0 * ss)
        };
        Point3::new(x, y, w * t.sin())
    }
}
