//! Geometry configuration errors.

use glam::DVec3;

/// Errors raised while validating tessellation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Resolution outside `2..=256`.
    #[error("resolution {0} is outside the supported range 2..=256")]
    InvalidResolution(i64),

    /// Negative subdivision level, or one whose chunk count cannot be addressed.
    #[error("subdivision level {0} is outside the supported range 0..=10")]
    InvalidSubdivisionLevel(i64),

    /// The tangent axes derived for an up direction are not an orthonormal pair.
    #[error("degenerate tangent basis for up direction {up}")]
    DegenerateBasis {
        /// The offending up direction.
        up: DVec3,
    },
}
