//! Chunk identifiers.

use crate::{CubeFace, SubdivisionLevel};

/// Identifies a chunk by face and position in `0..divisions`.
///
/// The position is a base-4 quadrant path: its least significant digit picks
/// the quadrant at the finest level and each division by 4 moves one level
/// coarser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkIndex {
    /// Which face the chunk belongs to.
    pub face: CubeFace,
    /// Position within the face, `< level.divisions()`.
    pub position: u32,
}

impl ChunkIndex {
    /// Construct an index, checking `position` against the level's chunk count.
    ///
    /// # Panics
    ///
    /// Panics if `position >= level.divisions()`.
    #[must_use]
    pub fn new(face: CubeFace, position: u32, level: SubdivisionLevel) -> Self {
        let divisions = level.divisions();
        assert!(
            position < divisions,
            "position {position} out of range for {divisions} chunks per face"
        );
        Self { face, position }
    }

    /// Slot in a flat `6 × divisions` table.
    #[inline]
    #[must_use]
    pub fn flat(self, level: SubdivisionLevel) -> usize {
        self.face.index() * level.divisions() as usize + self.position as usize
    }

    /// Quadrant digits from the coarsest level to the finest, each in `0..4`.
    pub fn quadrant_path(self, level: SubdivisionLevel) -> impl Iterator<Item = usize> {
        let position = self.position;
        (0..u32::from(level.get()))
            .rev()
            .map(move |depth| ((position >> (2 * depth)) & 0b11) as usize)
    }
}

impl std::fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, #{})", self.face, self.position)
    }
}
