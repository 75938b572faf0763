//! Parametric surfaces, ring oscillators and a command-driven scene model
//! for an interactive 3D ring demo.
//!
//! The crate produces engine-agnostic data: triangle meshes, scene-graph
//! transforms, material selections and light intensities. A host renderer
//! feeds input through [`scene::Scene::apply`], calls
//! [`scene::Scene::tick`] once per frame, and draws what it reads back.

pub mod error;
pub mod geometry;
pub mod math;
pub mod scene;
pub mod tessellation;

pub use error::{ParasceneError, Result};
