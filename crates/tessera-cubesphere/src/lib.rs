//! Cube-sphere chunk geometry: cube faces, tangent bases, and the quad-tree
//! decoding that maps a chunk index to its sub-square of a face.

mod basis;
mod chunk_descriptor;
mod chunk_index;
mod chunk_set;
mod cube_face;
mod error;
mod params;

pub use basis::{Basis, BasisTable};
pub use chunk_descriptor::{ChunkDescriptor, FACE_EXTENT, QUADRANT_OFFSETS};
pub use chunk_index::ChunkIndex;
pub use chunk_set::ChunkSet;
pub use cube_face::CubeFace;
pub use error::GeometryError;
pub use params::{Resolution, SubdivisionLevel};
