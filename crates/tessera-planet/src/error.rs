//! Planet generation errors.

use tessera_cubesphere::GeometryError;

/// Errors surfaced by chunk-set builds, regeneration and colour updates.
#[derive(Debug, thiserror::Error)]
pub enum PlanetError {
    /// Invalid tessellation parameters or basis.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// `regenerate` was called before any chunk set was built.
    #[error("no chunk set has been built")]
    ChunkSetMissing,

    /// The render backend rejected a request.
    #[error("render backend error: {0}")]
    Backend(String),
}
