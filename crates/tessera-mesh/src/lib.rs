//! Chunk meshing: turns a chunk descriptor and a shape function into a
//! watertight grid of vertices, triangles and normals.

pub mod builder;
pub mod mesh_buffer;
pub mod normals;
pub mod winding;

pub use builder::ChunkMeshBuilder;
pub use mesh_buffer::MeshBuffer;
pub use normals::{accumulate_triangle_normals, position_normals};
pub use tessera_config::NormalMode;
pub use winding::{triangle_normal, triangle_winds_along, winding_is_consistent};
