//! Chunk descriptors: the sub-square of a face covered by one chunk.
//!
//! A grid point with parametric coordinate `percent ∈ [0, 1]²` lands on the
//! cube at
//!
//! ```text
//! up + (percent.x − offset.x) · size · axis_a + (percent.y − offset.y) · size · axis_b
//! ```
//!
//! `offset` is measured in chunk-size units and `size` in face units, where a
//! whole face spans `[-1, 1]²`. Decoding starts from the whole face
//! (`offset = (0.5, 0.5)`, `size = 2`) and, for each quadrant digit from the
//! coarsest level down, folds
//!
//! ```text
//! offset ← 2 · offset + quadrant − (1, 1)
//! size   ← size / 2
//! ```
//!
//! Sizes are powers of two, so every offset and edge coordinate is exact in
//! `f64` and neighbouring chunks share bit-identical edges.

use glam::{DVec2, DVec3};

use crate::{Basis, ChunkIndex, CubeFace, Resolution, SubdivisionLevel};

/// Edge length of a whole face in face-local units.
pub const FACE_EXTENT: f64 = 2.0;

/// Quadrant offsets selected by each base-4 digit of a chunk position.
pub const QUADRANT_OFFSETS: [DVec2; 4] = [
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.0, 0.0),
];

/// Geometry of one chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkDescriptor {
    /// Which chunk this describes.
    pub index: ChunkIndex,
    /// Placement within the face, in chunk-size units.
    pub offset: DVec2,
    /// Edge length in face units, `2 / sqrt(divisions)`.
    pub size: f64,
    /// Grid points per edge.
    pub resolution: Resolution,
}

impl ChunkDescriptor {
    /// Decode the descriptor of `index` at the given depth.
    #[must_use]
    pub fn decode(index: ChunkIndex, level: SubdivisionLevel, resolution: Resolution) -> Self {
        let (offset, size) = index.quadrant_path(level).fold(
            (DVec2::splat(0.5), FACE_EXTENT),
            |(offset, size), quadrant| {
                (
                    offset * 2.0 + QUADRANT_OFFSETS[quadrant] - DVec2::ONE,
                    size * 0.5,
                )
            },
        );

        Self {
            index,
            offset,
            size,
            resolution,
        }
    }

    /// The face this chunk lies on.
    #[inline]
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.index.face
    }

    /// Face-local coordinate of a grid point, in `[-1, 1]²`.
    #[inline]
    #[must_use]
    pub fn face_point(&self, percent: DVec2) -> DVec2 {
        (percent - self.offset) * self.size
    }

    /// Point on the `[-1, 1]` cube for a grid point. Not normalized.
    #[inline]
    #[must_use]
    pub fn point_on_cube(&self, basis: &Basis, percent: DVec2) -> DVec3 {
        let local = self.face_point(percent);
        basis.up + local.x * basis.axis_a + local.y * basis.axis_b
    }

    /// Lower and upper corners of the chunk in face-local units.
    #[must_use]
    pub fn bounds(&self) -> (DVec2, DVec2) {
        (self.face_point(DVec2::ZERO), self.face_point(DVec2::ONE))
    }

    /// Centre of the chunk in face-local units.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.face_point(DVec2::splat(0.5))
    }
}
