pub mod surface;

pub use surface::{evaluate, ParametricSurface, Surface, SurfaceKind};
