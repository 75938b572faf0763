/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Builds a rotation matrix from Euler angles applied in X, Y, Z order.
///
/// The result is `Rx * Ry * Rz`, so a point is rotated about Z first.
#[must_use]
pub fn euler_xyz(rotation: &Vector3) -> Matrix4 {
    Matrix4::new_rotation(Vector3::x() * rotation.x)
        * Matrix4::new_rotation(Vector3::y() * rotation.y)
        * Matrix4::new_rotation(Vector3::z() * rotation.z)
}

/// Returns the point at `angle` on a circle of `radius` in the XY plane.
#[must_use]
pub fn polar_xy(radius: f64, angle: f64, z: f64) -> Point3 {
    Point3::new(radius * angle.cos(), radius * angle.sin(), z)
}
