use crate::geometry::SurfaceKind;
use crate::math::{euler_xyz, Matrix4, Point3, Vector3};
use crate::tessellation::TriangleMesh;

use super::material::MaterialTable;
use super::RingId;

slotmap::new_key_type! {
    /// Unique identifier for a node in the scene graph.
    pub struct EntityId;
}

/// Local transform of a scene-graph node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3,
    /// Euler angles in radians, applied in X, Y, Z order.
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Transform {
    /// Identity transform placed at `position`.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Returns a copy with the given Euler rotation.
    #[must_use]
    pub fn rotated(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with a uniform scale.
    #[must_use]
    pub fn scaled(mut self, s: f64) -> Self {
        self.scale = Vector3::repeat(s);
        self
    }

    /// Local-to-parent matrix: `T * Rx * Ry * Rz * S`.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.position.coords)
            * euler_xyz(&self.rotation)
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: Vector3::zeros(),
            scale: Vector3::repeat(1.0),
        }
    }
}

/// What a node represents. Drives per-frame behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRole {
    Dome,
    Ring(RingId),
    Cylinder,
    Surface(SurfaceKind),
    Mobius,
}

/// A scene-graph node: a transform, an optional renderable and its materials.
#[derive(Debug, Clone)]
pub struct EntityData {
    pub role: EntityRole,
    pub transform: Transform,
    pub parent: Option<EntityId>,
    pub mesh: TriangleMesh,
    pub materials: MaterialTable,
}

impl EntityData {
    /// Creates an unparented node.
    #[must_use]
    pub fn new(
        role: EntityRole,
        transform: Transform,
        mesh: TriangleMesh,
        materials: MaterialTable,
    ) -> Self {
        Self {
            role,
            transform,
            parent: None,
            mesh,
            materials,
        }
    }

    /// Attaches the node to `parent`.
    #[must_use]
    pub fn attached_to(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }
}
