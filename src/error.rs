use thiserror::Error;

/// Top-level error type for the parascene crate.
#[derive(Debug, Error)]
pub enum ParasceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to surface construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors related to the scene graph and its configuration.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`ParasceneError`].
pub type Result<T> = std::result::Result<T, ParasceneError>;
