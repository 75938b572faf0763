#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use parascene::geometry::surface::{Doughnut, MobiusStrip};
use parascene::geometry::{evaluate, Surface, SurfaceKind};
use parascene::tessellation::TessellateParametric;

const GRID: u32 = 64;

fn grid() -> impl Iterator<Item = (f64, f64)> {
    (0..=GRID).flat_map(|i| {
        (0..=GRID).map(move |j| (f64::from(i) / f64::from(GRID), f64::from(j) / f64::from(GRID)))
    })
}

#[test]
fn every_kind_is_finite_on_dense_grid() {
    for kind in SurfaceKind::ALL {
        for (u, v) in grid() {
            let p = evaluate(kind, u, v);
            assert!(
                p.x.is_finite() && p.y.is_finite() && p.z.is_finite(),
                "{} produced {p:?} at ({u}, {v})",
                kind.name()
            );
        }
    }
}

#[test]
fn doughnut_stays_within_tube_annulus() {
    for (u, v) in grid() {
        let p = evaluate(SurfaceKind::Doughnut, u, v);
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!((3.0 - 1e-9..=7.0 + 1e-9).contains(&r), "r = {r} at ({u}, {v})");
    }
}

#[test]
fn doughnut_points_are_on_the_tube() {
    let d = Doughnut::default();
    for (u, v) in grid() {
        let p = d.evaluate(u, v);
        let ring = (p.x * p.x + p.y * p.y).sqrt() - d.major_radius();
        assert_relative_eq!((ring * ring + p.z * p.z).sqrt(), d.minor_radius(), epsilon = 1e-9);
    }
}

#[test]
fn evaluation_is_idempotent() {
    for kind in SurfaceKind::ALL {
        for &(u, v) in &[(0.0, 0.0), (0.13, 0.77), (0.5, 0.5), (1.0, 1.0)] {
            assert_eq!(evaluate(kind, u, v), evaluate(kind, u, v));
        }
    }
}

#[test]
fn hyperboloid_waist_starts_on_x_axis() {
    let p = evaluate(SurfaceKind::Hyperboloid, 0.5, 0.0);
    assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn tessellated_meshes_are_finite_and_indexed() {
    for kind in SurfaceKind::ALL {
        let surface = kind.surface();
        let mesh = TessellateParametric::new(&surface, 17, 23).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 18 * 24);
        let n = u32::try_from(mesh.vertex_count()).unwrap();
        assert!(mesh.indices.iter().flatten().all(|&i| i < n));
        assert!(mesh
            .normals
            .iter()
            .all(|nrm| nrm.iter().all(|c| c.is_finite()) && (nrm.norm() - 1.0).abs() < 1e-6));
    }
}

#[test]
fn mobius_strip_closes_with_a_half_twist() {
    let strip = MobiusStrip::default();
    for i in 0..=8 {
        let u = f64::from(i) / 8.0;
        let start = strip.evaluate(u, 0.0);
        let end = strip.evaluate(1.0 - u, 1.0);
        assert!((start - end).norm() < 1e-9);
    }
}
