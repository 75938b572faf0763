//! Scene graph, lighting and per-frame behaviour of the ring demo.
//!
//! A [`Scene`] owns every node and light in two slot maps, plus the small
//! amount of global state the commands toggle. Hosts drive it with
//! [`Scene::apply`] for input and [`Scene::tick`] once per frame, then read
//! back transforms, meshes, materials and light intensities to render.

mod command;
mod config;
mod entity;
mod light;
mod material;
mod oscillator;

pub use command::{Command, InputMapper};
pub use config::{RingSpec, SceneConfig};
pub use entity::{EntityData, EntityId, EntityRole, Transform};
pub use light::{LightData, LightGroup, LightId, LightKind};
pub use material::{
    Material, MaterialTable, Shading, ShadingMode, Side, LAMBERT_RED, LIGHT_BLUE, PHONG_AMBER,
    TOON_GREEN,
};
pub use oscillator::{Direction, RingOscillator, LANE_MAX, LANE_MIN, STEP};

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use slotmap::SlotMap;
use tracing::{debug, info, trace};

use crate::error::{Result, SceneError};
use crate::geometry::surface::{Hemisphere, MobiusStrip, OpenCylinder};
use crate::geometry::{Surface, SurfaceKind};
use crate::math::{polar_xy, Matrix4, Point3, Vector3};
use crate::tessellation::{Diagonal, TessellateAnnulus, TessellateParametric, TriangleMesh};

/// Number of point lights around the top of the cylinder.
const POINT_LIGHT_COUNT: usize = 8;

/// Segments along the Möbius strip; across it there is a single segment.
const MOBIUS_SEGMENTS: usize = 20;

/// Depth of surfaces below their ring's plane.
const SURFACE_DEPTH: f64 = -6.0;

/// Depth of spotlights below their ring's plane.
const SPOTLIGHT_DEPTH: f64 = -3.0;

const WHITE: u32 = 0xFF_FFFF;
const AMBIENT_ORANGE: u32 = 0xFF_A500;

/// The three concentric rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingId {
    Big,
    Medium,
    Small,
}

impl RingId {
    pub const ALL: [RingId; 3] = [RingId::Big, RingId::Medium, RingId::Small];

    /// The ring's material table: its own lit model, and a flat colour
    /// when lighting is off.
    fn materials(self) -> MaterialTable {
        let (lit, basic) = match self {
            RingId::Big => (Material::lit(ShadingMode::Toon, TOON_GREEN), 0x00_FF00),
            RingId::Medium => (Material::lit(ShadingMode::Phong, PHONG_AMBER), PHONG_AMBER),
            RingId::Small => (Material::lit(ShadingMode::Lambert, LAMBERT_RED), LAMBERT_RED),
        };
        MaterialTable::fixed(lit, Material::basic(basic))
    }
}

/// Motion state of one ring.
#[derive(Debug, Clone)]
pub struct RingState {
    id: RingId,
    entity: EntityId,
    oscillator: RingOscillator,
    active: bool,
}

impl RingState {
    /// Which ring this is.
    #[must_use]
    pub fn id(&self) -> RingId {
        self.id
    }

    /// The ring's scene-graph node.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// The ring's lane position and direction.
    #[must_use]
    pub fn oscillator(&self) -> &RingOscillator {
        &self.oscillator
    }

    /// Whether the ring advances on the next tick.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The whole demo scene.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    entities: SlotMap<EntityId, EntityData>,
    lights: SlotMap<LightId, LightData>,
    rings: Vec<RingState>,
    dome: EntityId,
    cylinder: EntityId,
    mobius: EntityId,
    lights_on: bool,
    directional_on: bool,
    spot_on: bool,
    point_on: bool,
    wireframe: bool,
    shading: ShadingMode,
}

impl Scene {
    /// Builds the scene described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any mesh cannot
    /// be tessellated.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let mut entities = SlotMap::with_key();
        let mut lights = SlotMap::with_key();

        let dome = entities.insert(build_dome(&config)?);

        let (lane_min, lane_max) = config.lane;
        let mut rings = Vec::with_capacity(config.rings.len());
        for spec in &config.rings {
            let mesh = TessellateAnnulus::new(
                spec.inner_radius,
                spec.outer_radius,
                spec.depth,
                config.ring_segments,
            )
            .execute()?;
            let transform = Transform::at(Point3::new(0.0, lane_min, 0.0))
                .rotated(Vector3::new(FRAC_PI_2, 0.0, 0.0));
            let entity = entities.insert(EntityData::new(
                EntityRole::Ring(spec.id),
                transform,
                mesh,
                spec.id.materials(),
            ));
            rings.push(RingState {
                id: spec.id,
                entity,
                oscillator: RingOscillator::with_lane(lane_min, lane_max, config.lane_step),
                active: false,
            });
        }

        let (cyl_radius, cyl_height, cyl_y) = config.cylinder;
        let cylinder_mesh = TessellateParametric::new(
            &OpenCylinder::new(cyl_radius, cyl_height)?,
            config.cylinder_segments,
            1,
        )
        .execute()?;
        let cylinder = entities.insert(EntityData::new(
            EntityRole::Cylinder,
            Transform::at(Point3::new(0.0, cyl_y, 0.0)),
            cylinder_mesh,
            MaterialTable::fixed(
                Material::lit(ShadingMode::Normal, WHITE),
                Material::basic(0x00_00FF),
            ),
        ));

        let mut layout = surface_layout(&config);
        layout.shuffle(&mut StdRng::seed_from_u64(config.seed));
        layout.truncate(config.surface_count());
        let mut surfaces = layout.into_iter();

        #[allow(clippy::cast_precision_loss)]
        let step = TAU / config.items_per_ring as f64;
        for (ring, spec) in rings.iter().zip(&config.rings) {
            let radius = spec.outer_radius / config.item_radius_divisor;
            for i in 0..config.items_per_ring {
                #[allow(clippy::cast_precision_loss)]
                let angle = i as f64 * step;
                if let Some((kind, segments)) = surfaces.next() {
                    let mesh = tessellate_square(&kind.surface(), segments)?;
                    let transform = Transform::at(polar_xy(radius, angle, SURFACE_DEPTH))
                        .rotated(Vector3::new(-FRAC_PI_2, 0.0, 0.0))
                        .scaled(config.surface_scale);
                    entities.insert(
                        EntityData::new(
                            EntityRole::Surface(kind),
                            transform,
                            mesh,
                            MaterialTable::shaded(ShadingMode::Phong),
                        )
                        .attached_to(ring.entity),
                    );
                }
                let spot = LightKind::Spot {
                    angle: PI,
                    penumbra: 0.05,
                    decay: 2.0,
                    distance: 200.0,
                };
                let position = polar_xy(radius, angle, SPOTLIGHT_DEPTH);
                lights.insert(
                    LightData::new(spot, WHITE, config.lamp_intensity, position)
                        .attached_to(ring.entity),
                );
            }
        }

        let point_radius = config.point_light_radius / config.item_radius_divisor;
        for i in 0..POINT_LIGHT_COUNT {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * TAU / POINT_LIGHT_COUNT as f64;
            let position = Point3::new(
                point_radius * angle.cos(),
                config.cylinder_attachment_height,
                point_radius * angle.sin(),
            );
            let point = LightKind::Point { distance: 2000.0 };
            lights.insert(
                LightData::new(point, WHITE, config.lamp_intensity, position)
                    .attached_to(cylinder),
            );
        }

        let (mobius_radius, mobius_width) = config.mobius;
        let strip = MobiusStrip::new(mobius_radius, mobius_width)?;
        let mut mobius_mesh = TessellateParametric::new(&strip, 1, MOBIUS_SEGMENTS)
            .with_diagonal(Diagonal::Forward)
            .execute()?;
        mobius_mesh.compute_vertex_normals();
        let mobius = entities.insert(
            EntityData::new(
                EntityRole::Mobius,
                Transform::at(Point3::new(0.0, config.cylinder_attachment_height, 0.0))
                    .rotated(Vector3::new(FRAC_PI_2, 0.0, 0.0))
                    .scaled(config.surface_scale),
                mobius_mesh,
                MaterialTable::shaded(ShadingMode::Phong),
            )
            .attached_to(cylinder),
        );

        lights.insert(LightData::new(
            LightKind::Directional,
            WHITE,
            1.0,
            Point3::new(300.0, 300.0, 300.0),
        ));
        lights.insert(LightData::new(LightKind::Ambient, AMBIENT_ORANGE, 1.0, Point3::origin()));

        info!(
            entities = entities.len(),
            lights = lights.len(),
            seed = config.seed,
            "scene built"
        );

        Ok(Self {
            config,
            entities,
            lights,
            rings,
            dome,
            cylinder,
            mobius,
            lights_on: true,
            directional_on: true,
            spot_on: true,
            point_on: true,
            wireframe: false,
            shading: ShadingMode::Phong,
        })
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) {
        debug!(?command, "applying command");
        match command {
            Command::SetRingMotion { ring, active } => {
                if let Some(state) = self.rings.iter_mut().find(|r| r.id == ring) {
                    state.active = active;
                }
            }
            Command::SetShading(mode) => {
                self.shading = mode;
                for entity in self.entities.values_mut() {
                    entity.materials.select(mode);
                }
            }
            Command::ToggleLights => self.lights_on = !self.lights_on,
            Command::ToggleLight(group) => {
                let flag = match group {
                    LightGroup::Directional => &mut self.directional_on,
                    LightGroup::Spot => &mut self.spot_on,
                    LightGroup::Point => &mut self.point_on,
                };
                *flag = !*flag;
            }
            Command::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                for entity in self.entities.values_mut() {
                    entity.materials.set_wireframe(self.wireframe);
                }
            }
        }
    }

    /// Advances the scene by one frame lasting `dt` seconds.
    ///
    /// Only the cylinder spin depends on `dt`; ring motion and the surface
    /// and Möbius spins advance by a fixed amount per frame.
    pub fn tick(&mut self, dt: f64) {
        if let Some(cylinder) = self.entities.get_mut(self.cylinder) {
            cylinder.transform.rotation.y += self.config.cylinder_spin * dt;
        }

        for ring in &mut self.rings {
            if !ring.active {
                continue;
            }
            if ring.oscillator.advance() {
                debug!(
                    ring = ?ring.id,
                    position = ring.oscillator.position(),
                    direction = ?ring.oscillator.direction(),
                    "ring bounced"
                );
            }
            if let Some(node) = self.entities.get_mut(ring.entity) {
                node.transform.position.y = ring.oscillator.position();
            }
        }

        for entity in self.entities.values_mut() {
            match entity.role {
                EntityRole::Surface(_) => entity.transform.rotation.y += self.config.surface_spin,
                EntityRole::Mobius => entity.transform.rotation.z += self.config.mobius_spin,
                EntityRole::Dome | EntityRole::Ring(_) | EntityRole::Cylinder => {}
            }
        }

        self.sync_lights();
        trace!(dt, "tick");
    }

    /// Pushes the group switches into the lights. Lights keep their last
    /// state while the master switch is off.
    fn sync_lights(&mut self) {
        if !self.lights_on {
            return;
        }
        let lamp = self.config.lamp_intensity;
        for light in self.lights.values_mut() {
            match light.kind.group() {
                Some(LightGroup::Directional) => light.enabled = self.directional_on,
                Some(LightGroup::Spot) => light.intensity = if self.spot_on { lamp } else { 0.0 },
                Some(LightGroup::Point) => light.intensity = if self.point_on { lamp } else { 0.0 },
                None => {}
            }
        }
    }

    /// The configuration the scene was built from.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not in the scene.
    pub fn entity(&self, id: EntityId) -> Result<&EntityData> {
        self.entities
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound(format!("entity {id:?}")).into())
    }

    /// Iterates over all nodes.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &EntityData)> {
        self.entities.iter()
    }

    /// Direct children of `parent`.
    pub fn children(&self, parent: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .filter(move |(_, e)| e.parent == Some(parent))
            .map(|(id, _)| id)
    }

    /// Returns the light data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the light is not in the scene.
    pub fn light(&self, id: LightId) -> Result<&LightData> {
        self.lights
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound(format!("light {id:?}")).into())
    }

    /// Iterates over all lights.
    pub fn lights(&self) -> impl Iterator<Item = (LightId, &LightData)> {
        self.lights.iter()
    }

    /// Returns the motion state of `ring`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring was not configured.
    pub fn ring(&self, ring: RingId) -> Result<&RingState> {
        self.rings
            .iter()
            .find(|r| r.id == ring)
            .ok_or_else(|| SceneError::EntityNotFound(format!("ring {ring:?}")).into())
    }

    /// The dome node.
    #[must_use]
    pub fn dome(&self) -> EntityId {
        self.dome
    }

    /// The central cylinder node.
    #[must_use]
    pub fn cylinder(&self) -> EntityId {
        self.cylinder
    }

    /// The Möbius strip node.
    #[must_use]
    pub fn mobius(&self) -> EntityId {
        self.mobius
    }

    /// Whether lit materials are in use.
    #[must_use]
    pub fn lights_on(&self) -> bool {
        self.lights_on
    }

    /// Whether a light group is switched on.
    #[must_use]
    pub fn light_group_on(&self, group: LightGroup) -> bool {
        match group {
            LightGroup::Directional => self.directional_on,
            LightGroup::Spot => self.spot_on,
            LightGroup::Point => self.point_on,
        }
    }

    /// Whether lit materials are drawn as wireframes.
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// The most recently selected shading mode.
    #[must_use]
    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    /// The material a renderer should bind for `id` right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not in the scene.
    pub fn active_material(&self, id: EntityId) -> Result<&Material> {
        Ok(self.entity(id)?.materials.active(self.lights_on))
    }

    /// Local-to-world matrix of a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node or one of its ancestors is missing.
    pub fn world_matrix(&self, id: EntityId) -> Result<Matrix4> {
        let mut matrix = Matrix4::identity();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.entity(node_id)?;
            matrix = node.transform.matrix() * matrix;
            current = node.parent;
        }
        Ok(matrix)
    }

    /// World-space origin of a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node or one of its ancestors is missing.
    pub fn world_position(&self, id: EntityId) -> Result<Point3> {
        Ok(self.world_matrix(id)?.transform_point(&Point3::origin()))
    }

    /// World-space position of a light.
    ///
    /// # Errors
    ///
    /// Returns an error if the light or its parent node is missing.
    pub fn light_world_position(&self, id: LightId) -> Result<Point3> {
        let light = self.light(id)?;
        match light.parent {
            Some(parent) => Ok(self.world_matrix(parent)?.transform_point(&light.position)),
            None => Ok(light.position),
        }
    }
}

fn build_dome(config: &SceneConfig) -> Result<EntityData> {
    let (w, h) = config.dome_segments;
    let mesh = TessellateParametric::new(&Hemisphere::new(config.dome_radius)?, w, h).execute()?;
    let textured = Material {
        shading: Shading::Textured,
        color: WHITE,
        wireframe: false,
        side: Side::Back,
    };
    Ok(EntityData::new(
        EntityRole::Dome,
        Transform::default(),
        mesh,
        MaterialTable::fixed(textured, Material::basic(LIGHT_BLUE).with_side(Side::Double)),
    ))
}

/// Every `(kind, segments)` pair of the surface sets, in layout order.
fn surface_layout(config: &SceneConfig) -> Vec<(SurfaceKind, usize)> {
    config
        .surface_segments
        .iter()
        .flat_map(|set| SurfaceKind::ALL.iter().copied().zip(set.iter().copied()))
        .collect()
}

fn tessellate_square(surface: &dyn Surface, segments: usize) -> Result<TriangleMesh> {
    TessellateParametric::new(surface, segments, segments).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(SceneConfig::default()).unwrap()
    }

    fn surfaces(scene: &Scene) -> Vec<EntityId> {
        scene
            .entities()
            .filter(|(_, e)| matches!(e.role, EntityRole::Surface(_)))
            .map(|(id, _)| id)
            .collect()
    }

    #[test]
    fn builds_expected_population() {
        let s = scene();
        // dome + 3 rings + cylinder + 24 surfaces + mobius
        assert_eq!(s.entities().count(), 30);
        // 24 spots + 8 points + directional + ambient
        assert_eq!(s.lights().count(), 34);
        assert_eq!(surfaces(&s).len(), 24);
    }

    #[test]
    fn each_ring_carries_eight_surfaces_of_mixed_kinds() {
        let s = scene();
        let mut kinds_seen = std::collections::HashMap::new();
        for ring in RingId::ALL {
            let entity = s.ring(ring).unwrap().entity();
            let children: Vec<_> = s.children(entity).collect();
            assert_eq!(children.len(), 8);
            for child in children {
                if let EntityRole::Surface(kind) = s.entity(child).unwrap().role {
                    *kinds_seen.entry(kind).or_insert(0) += 1;
                }
            }
        }
        for kind in SurfaceKind::ALL {
            assert_eq!(kinds_seen.get(&kind), Some(&3));
        }
    }

    #[test]
    fn shuffle_is_seeded() {
        let layout = |seed| {
            let s = Scene::new(SceneConfig {
                seed,
                ..SceneConfig::default()
            })
            .unwrap();
            let big = s.ring(RingId::Big).unwrap().entity();
            s.children(big)
                .map(|id| s.entity(id).unwrap().mesh.vertex_count())
                .collect::<Vec<_>>()
        };
        assert_eq!(layout(7), layout(7));
    }

    #[test]
    fn surfaces_sit_inside_their_ring() {
        let s = scene();
        let big = s.ring(RingId::Big).unwrap().entity();
        for child in s.children(big) {
            let p = s.entity(child).unwrap().transform.position;
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 80.0).abs() < 1e-9);
            assert!((p.z - SURFACE_DEPTH).abs() < 1e-12);
        }
    }

    #[test]
    fn ring_motion_follows_oscillator() {
        let mut s = scene();
        s.apply(Command::SetRingMotion {
            ring: RingId::Medium,
            active: true,
        });
        for _ in 0..10 {
            s.tick(1.0 / 60.0);
        }
        let medium = s.ring(RingId::Medium).unwrap();
        assert!((medium.oscillator().position() - 3.0).abs() < 1e-9);
        let y = s.entity(medium.entity()).unwrap().transform.position.y;
        assert!((y - 3.0).abs() < 1e-9);
        let big = s.ring(RingId::Big).unwrap();
        assert!(big.oscillator().position().abs() < f64::EPSILON);
    }

    #[test]
    fn shading_switches_surfaces_but_not_rings() {
        let mut s = scene();
        s.apply(Command::SetShading(ShadingMode::Toon));
        assert_eq!(s.shading(), ShadingMode::Toon);
        let surface = surfaces(&s)[0];
        assert_eq!(
            s.active_material(surface).unwrap().shading,
            Shading::Lit(ShadingMode::Toon)
        );
        assert_eq!(
            s.active_material(s.mobius()).unwrap().shading,
            Shading::Lit(ShadingMode::Toon)
        );
        let small = s.ring(RingId::Small).unwrap().entity();
        assert_eq!(
            s.active_material(small).unwrap().shading,
            Shading::Lit(ShadingMode::Lambert)
        );
    }

    #[test]
    fn master_switch_selects_basic_materials() {
        let mut s = scene();
        s.apply(Command::ToggleLights);
        assert!(!s.lights_on());
        assert_eq!(s.active_material(s.cylinder()).unwrap().color, 0x00_00FF);
        assert_eq!(s.active_material(s.dome()).unwrap().color, LIGHT_BLUE);
        let big = s.ring(RingId::Big).unwrap().entity();
        assert_eq!(s.active_material(big).unwrap().color, 0x00_FF00);
    }

    #[test]
    fn spot_toggle_applies_on_tick() {
        let mut s = scene();
        s.apply(Command::ToggleLight(LightGroup::Spot));
        s.tick(0.0);
        for (_, light) in s.lights() {
            match light.kind {
                LightKind::Spot { .. } => assert!(light.intensity.abs() < f64::EPSILON),
                LightKind::Point { .. } => assert!((light.intensity - 100.0).abs() < f64::EPSILON),
                _ => {}
            }
        }
    }

    #[test]
    fn light_groups_frozen_while_master_is_off() {
        let mut s = scene();
        s.apply(Command::ToggleLights);
        s.apply(Command::ToggleLight(LightGroup::Directional));
        s.tick(0.0);
        let directional = s
            .lights()
            .find(|(_, l)| l.kind == LightKind::Directional)
            .map(|(id, _)| id)
            .unwrap();
        assert!(s.light(directional).unwrap().enabled);

        s.apply(Command::ToggleLights);
        s.tick(0.0);
        assert!(!s.light(directional).unwrap().enabled);
    }

    #[test]
    fn wireframe_toggles_lit_materials() {
        let mut s = scene();
        s.apply(Command::ToggleWireframe);
        assert!(s.wireframe());
        let surface = surfaces(&s)[0];
        assert!(s.active_material(surface).unwrap().wireframe);
        s.apply(Command::ToggleWireframe);
        assert!(!s.active_material(surface).unwrap().wireframe);
    }

    #[test]
    fn spins_accumulate() {
        let mut s = scene();
        s.tick(2.0);
        s.tick(2.0);
        let cyl = s.entity(s.cylinder()).unwrap();
        assert!((cyl.transform.rotation.y - 0.4).abs() < 1e-12);
        let mobius = s.entity(s.mobius()).unwrap();
        assert!((mobius.transform.rotation.z - 0.02).abs() < 1e-12);
        let surface = s.entity(surfaces(&s)[0]).unwrap();
        assert!((surface.transform.rotation.y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn mobius_hangs_above_cylinder_centre() {
        let s = scene();
        let p = s.world_position(s.mobius()).unwrap();
        assert!((p - Point3::new(0.0, 95.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn point_lights_follow_cylinder() {
        let s = scene();
        for (id, light) in s.lights() {
            if let LightKind::Point { .. } = light.kind {
                let p = s.light_world_position(id).unwrap();
                assert!((p.y - 95.0).abs() < 1e-9);
                let r = (p.x * p.x + p.z * p.z).sqrt();
                assert!((r - 12.5 / 1.2).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn only_placed_surfaces_are_built() {
        let config = SceneConfig {
            items_per_ring: 5,
            ..SceneConfig::default()
        };
        assert_eq!(config.surface_count(), 15);
        let s = Scene::new(config).unwrap();
        assert_eq!(surfaces(&s).len(), 15);
        for ring in RingId::ALL {
            let entity = s.ring(ring).unwrap().entity();
            assert_eq!(s.children(entity).count(), 5);
        }
        // 15 spots + 8 points + directional + ambient
        assert_eq!(s.lights().count(), 25);
    }

    #[test]
    fn mobius_keeps_reference_triangles() {
        let s = scene();
        let mesh = &s.entity(s.mobius()).unwrap().mesh;
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.indices[0], [0, 1, 3]);
        assert_eq!(mesh.indices[1], [3, 2, 0]);
    }

    #[test]
    fn missing_keys_are_named_in_errors() {
        let s = scene();
        let err = s.entity(EntityId::default()).err().unwrap();
        assert!(err.to_string().contains("EntityId("), "{err}");
        let err = s.light(LightId::default()).err().unwrap();
        assert!(err.to_string().contains("LightId("), "{err}");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig {
            lane_step: -1.0,
            ..SceneConfig::default()
        };
        assert!(Scene::new(config).is_err());
    }
}
