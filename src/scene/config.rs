use crate::error::{Result, SceneError};
use crate::geometry::SurfaceKind;

use super::oscillator::{LANE_MAX, LANE_MIN, STEP};
use super::RingId;

/// Dimensions of one extruded ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub id: RingId,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub depth: f64,
}

/// Every tunable constant of the scene.
///
/// `Default` reproduces the reference layout; tests and demos override
/// individual fields (usually just `seed`).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Seed for the surface shuffle before surfaces are handed to rings.
    pub seed: u64,
    /// Rings, outermost first. Surfaces are distributed in this order.
    pub rings: [RingSpec; 3],
    /// Angular segments used for ring meshes.
    pub ring_segments: usize,
    /// Lower and upper bound of the ring lane.
    pub lane: (f64, f64),
    /// Lane distance per active tick.
    pub lane_step: f64,
    /// Number of surfaces (and spotlights) per ring.
    pub items_per_ring: usize,
    /// Ring radius is divided by this to place items inside the ring.
    pub item_radius_divisor: f64,
    /// Segment counts per surface set, indexed like [`SurfaceKind::ALL`].
    pub surface_segments: [[usize; 8]; 3],
    /// Uniform scale applied to every surface and the Möbius strip.
    pub surface_scale: f64,
    /// Radians added to each surface's y-rotation per tick.
    pub surface_spin: f64,
    /// Top cylinder radius, height and centre height.
    pub cylinder: (f64, f64, f64),
    /// Radial segments of the cylinder mesh.
    pub cylinder_segments: usize,
    /// Cylinder spin rate in radians per second.
    pub cylinder_spin: f64,
    /// Radians added to the Möbius strip's z-rotation per tick.
    pub mobius_spin: f64,
    /// Möbius centre radius and half-width.
    pub mobius: (f64, f64),
    /// Height of the Möbius strip and point lights above the cylinder centre.
    pub cylinder_attachment_height: f64,
    /// Radius of the point-light circle before dividing by the item divisor.
    pub point_light_radius: f64,
    /// Dome radius and its (width, height) segments.
    pub dome_radius: f64,
    pub dome_segments: (usize, usize),
    /// Intensity of an enabled spot or point light.
    pub lamp_intensity: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            rings: [
                RingSpec {
                    id: RingId::Big,
                    inner_radius: 68.0,
                    outer_radius: 96.0,
                    depth: 18.0,
                },
                RingSpec {
                    id: RingId::Medium,
                    inner_radius: 40.0,
                    outer_radius: 68.0,
                    depth: 18.0,
                },
                RingSpec {
                    id: RingId::Small,
                    inner_radius: 12.0,
                    outer_radius: 40.0,
                    depth: 18.0,
                },
            ],
            ring_segments: 64,
            lane: (LANE_MIN, LANE_MAX),
            lane_step: STEP,
            items_per_ring: 8,
            item_radius_divisor: 1.2,
            surface_segments: [
                [21, 22, 23, 24, 25, 24, 23, 22],
                [18, 19, 20, 21, 22, 21, 20, 19],
                [17, 18, 19, 20, 19, 18, 17, 16],
            ],
            surface_scale: 0.5,
            surface_spin: 0.05,
            cylinder: (25.0, 90.0, 45.0),
            cylinder_segments: 100,
            cylinder_spin: 0.1,
            mobius_spin: 0.01,
            mobius: (20.0, 5.0),
            cylinder_attachment_height: 50.0,
            point_light_radius: 12.5,
            dome_radius: 400.0,
            dome_segments: (64, 32),
            lamp_intensity: 100.0,
        }
    }
}

impl SceneConfig {
    /// Number of parametric surfaces the scene will create: one per item
    /// slot, drawn from the shuffled surface sets.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        (self.rings.len() * self.items_per_ring)
            .min(self.surface_segments.len() * SurfaceKind::ALL.len())
    }

    /// Checks the configuration for values the scene cannot be built from.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SceneError::InvalidConfig(msg).into()) };
        let positive = |x: f64| x.is_finite() && x > 0.0;

        let (lo, hi) = self.lane;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return invalid(format!("lane bounds must satisfy min < max, got [{lo}, {hi}]"));
        }
        if !positive(self.lane_step) {
            return invalid(format!("lane step must be positive, got {}", self.lane_step));
        }
        if self.items_per_ring == 0 {
            return invalid("each ring needs at least one item".into());
        }
        if self.items_per_ring > SurfaceKind::ALL.len() {
            return invalid(format!(
                "at most {} items fit on a ring, got {}",
                SurfaceKind::ALL.len(),
                self.items_per_ring
            ));
        }
        if !positive(self.item_radius_divisor) {
            return invalid(format!(
                "item radius divisor must be positive, got {}",
                self.item_radius_divisor
            ));
        }
        for ring in &self.rings {
            let radii_ok = ring.inner_radius >= 0.0 && ring.inner_radius < ring.outer_radius;
            if !(radii_ok && ring.outer_radius.is_finite() && positive(ring.depth)) {
                return invalid(format!("ring {:?} has invalid dimensions", ring.id));
            }
        }
        for (i, a) in self.rings.iter().enumerate() {
            if self.rings[i + 1..].iter().any(|b| b.id == a.id) {
                return invalid(format!("ring {:?} is listed twice", a.id));
            }
        }
        if self.ring_segments < 3 {
            return invalid(format!("rings need at least 3 segments, got {}", self.ring_segments));
        }
        if self.surface_segments.iter().flatten().any(|&n| n == 0) {
            return invalid("surface segment counts must be at least 1".into());
        }
        let (radius, height, centre) = self.cylinder;
        if !(positive(radius) && positive(height) && centre.is_finite()) {
            return invalid(format!("cylinder dimensions are invalid: {:?}", self.cylinder));
        }
        if self.cylinder_segments == 0 {
            return invalid("cylinder needs at least 1 segment".into());
        }
        let (mobius_radius, mobius_width) = self.mobius;
        if !(positive(mobius_radius) && positive(mobius_width) && mobius_width < mobius_radius) {
            return invalid(format!("mobius dimensions are invalid: {:?}", self.mobius));
        }
        if !(positive(self.surface_scale) && positive(self.dome_radius)) {
            return invalid("surface scale and dome radius must be positive".into());
        }
        let (dome_w, dome_h) = self.dome_segments;
        if dome_w == 0 || dome_h == 0 {
            return invalid(format!("dome needs at least 1x1 segments, got {dome_w}x{dome_h}"));
        }
        let rates = [self.surface_spin, self.cylinder_spin, self.mobius_spin];
        let placement = [self.cylinder_attachment_height, self.point_light_radius];
        if rates.iter().chain(&placement).any(|x| !x.is_finite()) {
            return invalid("spin rates and light placement must be finite".into());
        }
        if !(self.lamp_intensity.is_finite() && self.lamp_intensity >= 0.0) {
            return invalid(format!(
                "lamp intensity must be finite and non-negative, got {}",
                self.lamp_intensity
            ));
        }
        Ok(())
    }
}
