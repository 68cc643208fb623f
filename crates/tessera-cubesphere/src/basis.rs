//! Tangent bases for the six cube faces.
//!
//! `axis_a` is the up vector with its components rotated one place
//! (`(up.y, up.z, up.x)`) and `axis_b = up × axis_a`. The rotation only yields
//! an orthonormal frame for axis-aligned up vectors, so bases are built solely
//! from [`CubeFace`] directions and every one is verified.

use glam::DVec3;

use crate::{CubeFace, GeometryError};

const ORTHO_EPSILON: f64 = 1e-12;

/// Orthonormal frame spanning one cube face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    /// Outward face direction.
    pub up: DVec3,
    /// First tangent axis; grid `x` advances along it.
    pub axis_a: DVec3,
    /// Second tangent axis; grid `y` advances along it.
    pub axis_b: DVec3,
}

impl Basis {
    /// Derive and verify the basis for `face`.
    pub fn for_face(face: CubeFace) -> Result<Self, GeometryError> {
        derive(face.up())
    }
}

/// Component rotation + cross product, rejecting anything not orthonormal.
fn derive(up: DVec3) -> Result<Basis, GeometryError> {
    let axis_a = DVec3::new(up.y, up.z, up.x);
    let axis_b = up.cross(axis_a);

    let unit = |v: DVec3| (v.length() - 1.0).abs() < ORTHO_EPSILON;
    let orthogonal = |a: DVec3, b: DVec3| a.dot(b).abs() < ORTHO_EPSILON;

    if !unit(up)
        || !unit(axis_a)
        || !unit(axis_b)
        || !orthogonal(up, axis_a)
        || !orthogonal(up, axis_b)
        || !orthogonal(axis_a, axis_b)
    {
        return Err(GeometryError::DegenerateBasis { up });
    }

    Ok(Basis { up, axis_a, axis_b })
}

/// Bases for all six faces, indexed by [`CubeFace::index`]. Immutable once
/// built and shared read-only by every chunk build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisTable([Basis; 6]);

impl BasisTable {
    /// Build and verify the bases of all six faces.
    pub fn new() -> Result<Self, GeometryError> {
        let mut bases = [Basis {
            up: DVec3::ZERO,
            axis_a: DVec3::ZERO,
            axis_b: DVec3::ZERO,
        }; 6];
        for face in CubeFace::ALL {
            bases[face.index()] = Basis::for_face(face)?;
        }
        Ok(Self(bases))
    }

    /// Basis of `face`.
    #[inline]
    #[must_use]
    pub fn get(&self, face: CubeFace) -> &Basis {
        &self.0[face.index()]
    }
}
