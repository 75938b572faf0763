use std::f64::consts::TAU;

use crate::error::{Result, TessellationError};
use crate::math::{Point2, Point3, Vector3};

use super::TriangleMesh;

/// Builds a closed ring: an annulus in the XY plane extruded along +Z.
///
/// The mesh has four parts with their own vertices (so normals stay sharp
/// at the rims): the cap at `z = 0`, the cap at `z = depth`, the outer wall
/// and the inner wall.
pub struct TessellateAnnulus {
    inner_radius: f64,
    outer_radius: f64,
    depth: f64,
    segments: usize,
}

impl TessellateAnnulus {
    /// Creates a new `TessellateAnnulus` operation.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64, depth: f64, segments: usize) -> Self {
        Self {
            inner_radius,
            outer_radius,
            depth,
            segments,
        }
    }

    /// Executes the tessellation, returning a closed triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner radius is negative or not less than the
    /// outer radius, the depth is not positive, or fewer than 3 segments
    /// are requested.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let (r_in, r_out, depth, n) = (
            self.inner_radius,
            self.outer_radius,
            self.depth,
            self.segments,
        );
        if !(r_in >= 0.0 && r_in < r_out && r_out.is_finite()) {
            return Err(TessellationError::InvalidParameters(format!(
                "annulus radii must satisfy 0 <= inner < outer, got {r_in} and {r_out}"
            ))
            .into());
        }
        if !(depth > 0.0 && depth.is_finite()) {
            return Err(TessellationError::InvalidParameters(format!(
                "annulus depth must be positive, got {depth}"
            ))
            .into());
        }
        if n < 3 {
            return Err(TessellationError::InvalidParameters(format!(
                "annulus needs at least 3 segments, got {n}"
            ))
            .into());
        }

        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(8 * n);
        mesh.normals.reserve(8 * n);
        mesh.uvs.reserve(8 * n);
        mesh.indices.reserve(8 * n);

        let angle = |i: usize| TAU * i as f64 / n as f64;
        let at = |r: f64, i: usize, z: f64| {
            let a = angle(i);
            Point3::new(r * a.cos(), r * a.sin(), z)
        };

        // Each band is two rings of `n` vertices; the quad between columns
        // `i` and `i + 1` wraps at the seam.
        let band = |mesh: &mut TriangleMesh,
                    first: (f64, f64),
                    second: (f64, f64),
                    normal_at: &dyn Fn(usize) -> Vector3| {
            let base = mesh.vertices.len() as u32;
            for (ring, &(r, z)) in [first, second].iter().enumerate() {
                for i in 0..n {
                    mesh.vertices.push(at(r, i, z));
                    mesh.normals.push(normal_at(i));
                    mesh.uvs.push(Point2::new(i as f64 / n as f64, ring as f64));
                }
            }
            for i in 0..n {
                let j = (i + 1) % n;
                let quad = [
                    base + i as u32,
                    base + j as u32,
                    base + (n + j) as u32,
                    base + (n + i) as u32,
                ];
                mesh.push_quad(quad, &(normal_at(i) + normal_at(j)));
            }
        };

        let down = |_: usize| -Vector3::z();
        let up = |_: usize| Vector3::z();
        let outward = |i: usize| {
            let a = angle(i);
            Vector3::new(a.cos(), a.sin(), 0.0)
        };
        let inward = |i: usize| -outward(i);

        band(&mut mesh, (r_in, 0.0), (r_out, 0.0), &down);
        band(&mut mesh, (r_in, depth), (r_out, depth), &up);
        band(&mut mesh, (r_out, 0.0), (r_out, depth), &outward);
        band(&mut mesh, (r_in, 0.0), (r_in, depth), &inward);

        Ok(mesh)
    }
}
