mod tessellate_annulus;
mod tessellate_parametric;

pub use tessellate_annulus::TessellateAnnulus;
pub use tessellate_parametric::{Diagonal, TessellateParametric};

use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let first = self.vertices.first()?;
        Some(self.vertices.iter().skip(1).fold((*first, *first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }

    /// Recomputes vertex normals from the triangles.
    ///
    /// Each vertex receives the sum of the (area-weighted) normals of the
    /// triangles that use it. Vertices whose sum vanishes get a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut acc = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| i as usize);
            let (Some(pa), Some(pb), Some(pc)) =
                (self.vertices.get(a), self.vertices.get(b), self.vertices.get(c))
            else {
                continue;
            };
            let n = (pb - pa).cross(&(pc - pa));
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc
            .into_iter()
            .map(|n| {
                let len = n.norm();
                if len < TOLERANCE {
                    Vector3::zeros()
                } else {
                    n / len
                }
            })
            .collect();
    }

    /// Pushes the two triangles of quad `a b c d` (given in cyclic order),
    /// wound so that their geometric normal agrees with `facing`.
    pub(crate) fn push_quad(&mut self, quad: [u32; 4], facing: &Vector3) {
        let [a, b, c, d] = quad;
        self.push_oriented([a, b, c], facing);
        self.push_oriented([a, c, d], facing);
    }

    fn push_oriented(&mut self, tri: [u32; 3], facing: &Vector3) {
        let [a, b, c] = tri;
        let p = |i: u32| self.vertices[i as usize];
        let n = (p(b) - p(a)).cross(&(p(c) - p(a)));
        if n.dot(facing) < 0.0 {
            self.indices.push([a, c, b]);
        } else {
            self.indices.push(tri);
        }
    }
}
