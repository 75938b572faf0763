use crate::math::Point3;

use super::entity::EntityId;

slotmap::new_key_type! {
    /// Unique identifier for a light in the scene.
    pub struct LightId;
}

/// Kind of light source, with the parameters specific to each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional,
    Spot {
        /// Cone opening angle in radians.
        angle: f64,
        penumbra: f64,
        decay: f64,
        /// Maximum reach; zero means unlimited.
        distance: f64,
    },
    Point {
        /// Maximum reach; zero means unlimited.
        distance: f64,
    },
}

/// Lights that can be toggled as a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightGroup {
    Directional,
    Spot,
    Point,
}

impl LightKind {
    /// The toggle group this light belongs to, if any.
    #[must_use]
    pub fn group(&self) -> Option<LightGroup> {
        match self {
            LightKind::Ambient => None,
            LightKind::Directional => Some(LightGroup::Directional),
            LightKind::Spot { .. } => Some(LightGroup::Spot),
            LightKind::Point { .. } => Some(LightGroup::Point),
        }
    }
}

/// A light attached to the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct LightData {
    pub kind: LightKind,
    /// 24-bit RGB colour.
    pub color: u32,
    pub intensity: f64,
    /// Position in the parent's local frame (world frame without a parent).
    pub position: Point3,
    pub parent: Option<EntityId>,
    /// Whether the light is part of the scene at all.
    pub enabled: bool,
}

impl LightData {
    /// Creates an enabled, unparented light.
    #[must_use]
    pub fn new(kind: LightKind, color: u32, intensity: f64, position: Point3) -> Self {
        Self {
            kind,
            color,
            intensity,
            position,
            parent: None,
            enabled: true,
        }
    }

    /// Attaches the light to `parent`.
    #[must_use]
    pub fn attached_to(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Intensity a renderer should use: zero when disabled.
    #[must_use]
    pub fn effective_intensity(&self) -> f64 {
        if self.enabled {
            self.intensity
        } else {
            0.0
        }
    }
}
