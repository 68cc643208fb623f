//! Per-vertex normal generation.
//!
//! Two strategies are offered. [`position_normals`] copies each vertex
//! position verbatim, which for a body centred at the origin approximates an
//! outward normal but is neither unit length nor aware of terrain slope.
//! [`accumulate_triangle_normals`] sums the area-weighted geometric normal of
//! every triangle touching a vertex and normalizes the result. It only sees
//! triangles inside the chunk, so normals along chunk edges ignore the
//! neighbouring chunk.

use glam::Vec3;

/// Normals equal to the (un-normalized) vertex positions.
pub fn position_normals(vertices: &[[f32; 3]], normals: &mut Vec<[f32; 3]>) {
    normals.clear();
    normals.extend_from_slice(vertices);
}

/// Smooth normals from the triangle list.
///
/// Vertices not referenced by any triangle (or only by degenerate ones) fall
/// back to their normalized position.
pub fn accumulate_triangle_normals(
    vertices: &[[f32; 3]],
    triangles: &[u32],
    normals: &mut Vec<[f32; 3]>,
) {
    let mut sums = vec![Vec3::ZERO; vertices.len()];

    for tri in triangles.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (v0, v1, v2) = (
            Vec3::from_array(vertices[a]),
            Vec3::from_array(vertices[b]),
            Vec3::from_array(vertices[c]),
        );
        // Unnormalized cross product: weight by triangle area.
        let n = (v1 - v0).cross(v2 - v0);
        sums[a] += n;
        sums[b] += n;
        sums[c] += n;
    }

    normals.clear();
    normals.extend(sums.iter().zip(vertices).map(|(sum, v)| {
        sum.try_normalize()
            .unwrap_or_else(|| Vec3::from_array(*v).normalize_or_zero())
            .to_array()
    }));
}
