use crate::error::{Result, TessellationError};
use crate::geometry::Surface;
use crate::math::{Point2, Vector3};

use super::TriangleMesh;

/// Which diagonal splits each grid cell into two triangles.
///
/// With `a = (u, v)`, `b = (u, v + 1)`, `c = (u + 1, v + 1)` and
/// `d = (u + 1, v)` as cell corners, both splits wind counter-clockwise
/// around `du x dv`, so faces agree with [`Surface::normal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diagonal {
    /// `b`-`d`: triangles `[a, d, b]` and `[d, c, b]`.
    #[default]
    Backward,
    /// `a`-`c`: triangles `[a, d, c]` and `[c, b, a]`.
    Forward,
}

/// Samples a parametric surface on a regular `(w + 1) x (h + 1)` grid.
pub struct TessellateParametric<'a> {
    surface: &'a dyn Surface,
    width_segments: usize,
    height_segments: usize,
    diagonal: Diagonal,
}

impl<'a> TessellateParametric<'a> {
    /// Creates a new `TessellateParametric` operation.
    ///
    /// `width_segments` subdivides `u`, `height_segments` subdivides `v`.
    #[must_use]
    pub fn new(surface: &'a dyn Surface, width_segments: usize, height_segments: usize) -> Self {
        Self {
            surface,
            width_segments,
            height_segments,
            diagonal: Diagonal::default(),
        }
    }

    /// Selects the diagonal used to split grid cells.
    #[must_use]
    pub fn with_diagonal(mut self, diagonal: Diagonal) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// Vertices are laid out row by row (rows follow `v`, columns follow `u`)
    /// and each grid cell is split into two triangles whose winding follows
    /// `du x dv`.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment count is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let n_u = self.width_segments;
        let n_v = self.height_segments;
        if n_u == 0 || n_v == 0 {
            return Err(TessellationError::InvalidParameters(format!(
                "segment counts must be at least 1, got {n_u}x{n_v}"
            ))
            .into());
        }

        let mut mesh = TriangleMesh::default();
        let rows = n_v + 1;
        let cols = n_u + 1;
        mesh.vertices.reserve(rows * cols);
        mesh.normals.reserve(rows * cols);
        mesh.uvs.reserve(rows * cols);
        mesh.indices.reserve(n_u * n_v * 2);

        for iv in 0..rows {
            #[allow(clippy::cast_precision_loss)]
            let v = iv as f64 / n_v as f64;
            for iu in 0..cols {
                #[allow(clippy::cast_precision_loss)]
                let u = iu as f64 / n_u as f64;
                let pt = self.surface.evaluate(u, v);
                if !(pt.x.is_finite() && pt.y.is_finite() && pt.z.is_finite()) {
                    return Err(TessellationError::Failed(format!(
                        "surface produced a non-finite point at ({u}, {v})"
                    ))
                    .into());
                }
                mesh.vertices.push(pt);
                mesh.normals.push(self.surface.normal(u, v).unwrap_or(Vector3::z()));
                mesh.uvs.push(Point2::new(u, v));
            }
        }

        for iv in 0..n_v {
            for iu in 0..n_u {
                let a = (iv * cols + iu) as u32;
                let b = ((iv + 1) * cols + iu) as u32;
                let c = ((iv + 1) * cols + iu + 1) as u32;
                let d = (iv * cols + iu + 1) as u32;
                match self.diagonal {
                    Diagonal::Backward => {
                        mesh.indices.push([a, d, b]);
                        mesh.indices.push([d, c, b]);
                    }
                    Diagonal::Forward => {
                        mesh.indices.push([a, d, c]);
                        mesh.indices.push([c, b, a]);
                    }
                }
            }
        }

        Ok(mesh)
    }
}
