mod cone;
mod doughnut;
mod enneper;
mod frustum;
mod hemisphere;
mod hyperboloid;
mod klein_bottle;
mod mobius;
mod open_cylinder;
mod tetrahedral;
mod twisted_cone;

pub use cone::Cone;
pub use doughnut::Doughnut;
pub use enneper::Enneper;
pub use frustum::Frustum;
pub use hemisphere::Hemisphere;
pub use hyperboloid::Hyperboloid;
pub use klein_bottle::KleinBottle;
pub use mobius::MobiusStrip;
pub use open_cylinder::OpenCylinder;
pub use tetrahedral::Tetrahedral;
pub use twisted_cone::TwistedCone;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Step used by the finite-difference normal estimate.
const NORMAL_EPSILON: f64 = 1e-5;

/// Trait for parametric surfaces sampled over the unit square.
///
/// Every implementation rescales `(u, v)` in `[0, 1] x [0, 1]` to whatever
/// domain its formula needs, so callers never deal with angles or signed
/// ranges directly.
pub trait Surface {
    /// Evaluates the surface at `(u, v)`, returning the 3D point.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Estimates the unit normal `du x dv` at `(u, v)` from central
    /// differences, clamped to the unit square at its edges.
    ///
    /// Returns `None` where the surface is degenerate (for example at a cone
    /// apex, where the v-tangent vanishes).
    fn normal(&self, u: f64, v: f64) -> Option<Vector3> {
        let (u0, u1) = ((u - NORMAL_EPSILON).max(0.0), (u + NORMAL_EPSILON).min(1.0));
        let (v0, v1) = ((v - NORMAL_EPSILON).max(0.0), (v + NORMAL_EPSILON).min(1.0));
        let du = self.evaluate(u1, v) - self.evaluate(u0, v);
        let dv = self.evaluate(u, v1) - self.evaluate(u, v0);
        let n = du.cross(&dv);
        let len = n.norm();
        if len < TOLERANCE || !len.is_finite() {
            return None;
        }
        Some(n / len)
    }
}

/// The eight surface formulas that ride on the rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Hyperboloid,
    KleinBottle,
    Enneper,
    TwistedCone,
    Tetrahedral,
    Cone,
    Frustum,
    Doughnut,
}

impl SurfaceKind {
    /// All kinds, in the order each ring set is laid out.
    pub const ALL: [SurfaceKind; 8] = [
        SurfaceKind::Hyperboloid,
        SurfaceKind::KleinBottle,
        SurfaceKind::Enneper,
        SurfaceKind::TwistedCone,
        SurfaceKind::Tetrahedral,
        SurfaceKind::Frustum,
        SurfaceKind::Cone,
        SurfaceKind::Doughnut,
    ];

    /// Returns the surface of this kind with its default dimensions.
    #[must_use]
    pub fn surface(self) -> ParametricSurface {
        match self {
            SurfaceKind::Hyperboloid => ParametricSurface::Hyperboloid(Hyperboloid::default()),
            SurfaceKind::KleinBottle => ParametricSurface::KleinBottle(KleinBottle),
            SurfaceKind::Enneper => ParametricSurface::Enneper(Enneper::default()),
            SurfaceKind::TwistedCone => ParametricSurface::TwistedCone(TwistedCone::default()),
            SurfaceKind::Tetrahedral => ParametricSurface::Tetrahedral(Tetrahedral::default()),
            SurfaceKind::Cone => ParametricSurface::Cone(Cone::default()),
            SurfaceKind::Frustum => ParametricSurface::Frustum(Frustum::default()),
            SurfaceKind::Doughnut => ParametricSurface::Doughnut(Doughnut::default()),
        }
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::Hyperboloid => "hyperboloid",
            SurfaceKind::KleinBottle => "klein_bottle",
            SurfaceKind::Enneper => "enneper",
            SurfaceKind::TwistedCone => "twisted_cone",
            SurfaceKind::Tetrahedral => "tetrahedral",
            SurfaceKind::Cone => "cone",
            SurfaceKind::Frustum => "frustum",
            SurfaceKind::Doughnut => "doughnut",
        }
    }
}

/// A surface of one of the eight [`SurfaceKind`]s with concrete dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum ParametricSurface {
    Hyperboloid(Hyperboloid),
    KleinBottle(KleinBottle),
    Enneper(Enneper),
    TwistedCone(TwistedCone),
    Tetrahedral(Tetrahedral),
    Cone(Cone),
    Frustum(Frustum),
    Doughnut(Doughnut),
}

impl ParametricSurface {
    /// Returns the kind tag of this surface.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        match self {
            ParametricSurface::Hyperboloid(_) => SurfaceKind::Hyperboloid,
            ParametricSurface::KleinBottle(_) => SurfaceKind::KleinBottle,
            ParametricSurface::Enneper(_) => SurfaceKind::Enneper,
            ParametricSurface::TwistedCone(_) => SurfaceKind::TwistedCone,
            ParametricSurface::Tetrahedral(_) => SurfaceKind::Tetrahedral,
            ParametricSurface::Cone(_) => SurfaceKind::Cone,
            ParametricSurface::Frustum(_) => SurfaceKind::Frustum,
            ParametricSurface::Doughnut(_) => SurfaceKind::Doughnut,
        }
    }
}

impl Surface for ParametricSurface {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        match self {
            ParametricSurface::Hyperboloid(s) => s.evaluate(u, v),
            ParametricSurface::KleinBottle(s) => s.evaluate(u, v),
            ParametricSurface::Enneper(s) => s.evaluate(u, v),
            ParametricSurface::TwistedCone(s) => s.evaluate(u, v),
            ParametricSurface::Tetrahedral(s) => s.evaluate(u, v),
            ParametricSurface::Cone(s) => s.evaluate(u, v),
            ParametricSurface::Frustum(s) => s.evaluate(u, v),
            ParametricSurface::Doughnut(s) => s.evaluate(u, v),
        }
    }
}

/// Evaluates the default-dimension surface of `kind` at `(u, v)`.
#[must_use]
pub fn evaluate(kind: SurfaceKind, u: f64, v: f64) -> Point3 {
    kind.surface().evaluate(u, v)
}

/// Rejects dimensions that are non-finite or not strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < TOLERANCE {
        return Err(
            GeometryError::Degenerate(format!("{name} must be positive, got {value}")).into(),
        );
    }
    Ok(value)
}
