//! The full set of chunk descriptors for all six faces.

use crate::{ChunkDescriptor, ChunkIndex, CubeFace, Resolution, SubdivisionLevel};

/// Every chunk of the cube at one subdivision level, stored face-major so
/// that [`ChunkIndex::flat`] addresses it directly.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkSet {
    level: SubdivisionLevel,
    resolution: Resolution,
    descriptors: Vec<ChunkDescriptor>,
}

impl ChunkSet {
    /// Enumerate all `6 × 4^level` chunk descriptors.
    #[must_use]
    pub fn build(level: SubdivisionLevel, resolution: Resolution) -> Self {
        let divisions = level.divisions();
        let mut descriptors = Vec::with_capacity(6 * divisions as usize);

        for face in CubeFace::ALL {
            for position in 0..divisions {
                let index = ChunkIndex::new(face, position, level);
                descriptors.push(ChunkDescriptor::decode(index, level, resolution));
            }
        }

        Self {
            level,
            resolution,
            descriptors,
        }
    }

    /// Subdivision level the set was built for.
    #[inline]
    #[must_use]
    pub fn level(&self) -> SubdivisionLevel {
        self.level
    }

    /// Grid resolution of every chunk.
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Chunks per face.
    #[inline]
    #[must_use]
    pub fn divisions(&self) -> u32 {
        self.level.divisions()
    }

    /// Total number of chunks, `6 × divisions`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Never true for a built set; provided for API symmetry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor of a chunk.
    #[must_use]
    pub fn get(&self, index: ChunkIndex) -> Option<&ChunkDescriptor> {
        if index.position >= self.divisions() {
            return None;
        }
        self.descriptors.get(index.flat(self.level))
    }

    /// All descriptors in face-major order.
    #[must_use]
    pub fn descriptors(&self) -> &[ChunkDescriptor] {
        &self.descriptors
    }

    /// Descriptors belonging to one face.
    #[must_use]
    pub fn face(&self, face: CubeFace) -> &[ChunkDescriptor] {
        let divisions = self.divisions() as usize;
        let start = face.index() * divisions;
        &self.descriptors[start..start + divisions]
    }

    /// Iterate over all descriptors.
    pub fn iter(&self) -> std::slice::Iter<'_, ChunkDescriptor> {
        self.descriptors.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkSet {
    type Item = &'a ChunkDescriptor;
    type IntoIter = std::slice::Iter<'a, ChunkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
