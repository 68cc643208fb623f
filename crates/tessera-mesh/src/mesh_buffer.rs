//! Per-chunk vertex, index and normal storage.

/// Mesh data for one chunk, ready to hand to a renderer.
///
/// The buffer is rebuilt in place on every regeneration: contents are
/// cleared and refilled, so existing allocations are reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions, `resolution²` entries in row-major grid order.
    pub vertices: Vec<[f32; 3]>,
    /// Triangle list, 3 indices per triangle.
    pub triangles: Vec<u32>,
    /// One normal per vertex.
    pub normals: Vec<[f32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer sized for a chunk of the given resolution.
    pub fn with_resolution(resolution: u32) -> Self {
        let verts = (resolution * resolution) as usize;
        let edge = resolution.saturating_sub(1) as usize;
        Self {
            vertices: Vec::with_capacity(verts),
            triangles: Vec::with_capacity(edge * edge * 6),
            normals: Vec::with_capacity(verts),
        }
    }

    /// Empty all three buffers, keeping their capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.normals.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Normals as bytes for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Indices as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}
