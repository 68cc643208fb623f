//! Triangle winding checks.
//!
//! Every triangle a chunk emits must wind the same way so back-face culling
//! treats all six faces alike. Orientation is measured against a reference
//! direction, normally the face's up vector.

use glam::Vec3;

use crate::MeshBuffer;

/// Geometric (unnormalized) normal of a triangle.
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0)
}

/// `true` if the triangle's normal has a positive component along `reference`.
pub fn triangle_winds_along(v0: Vec3, v1: Vec3, v2: Vec3, reference: Vec3) -> bool {
    triangle_normal(v0, v1, v2).dot(reference) > 0.0
}

/// `true` if every triangle in `mesh` winds positively around `reference`.
pub fn winding_is_consistent(mesh: &MeshBuffer, reference: Vec3) -> bool {
    mesh.triangles.chunks_exact(3).all(|tri| {
        let v = |i: u32| Vec3::from_array(mesh.vertices[i as usize]);
        triangle_winds_along(v(tri[0]), v(tri[1]), v(tri[2]), reference)
    })
}
