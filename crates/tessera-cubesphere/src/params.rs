//! Validated tessellation parameters.

use crate::GeometryError;

/// Quad-tree depth of every face. A face holds `4^level` chunks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubdivisionLevel(u8);

impl SubdivisionLevel {
    /// Deepest supported level: `4^10` chunks per face, `6 · 4^10` in total.
    pub const MAX: u8 = 10;

    /// Validate a raw level.
    pub fn new(level: i32) -> Result<Self, GeometryError> {
        u8::try_from(level)
            .ok()
            .filter(|&l| l <= Self::MAX)
            .map(Self)
            .ok_or(GeometryError::InvalidSubdivisionLevel(i64::from(level)))
    }

    /// The raw level.
    #[inline]
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Chunks per face, `4^level`.
    #[inline]
    #[must_use]
    pub fn divisions(self) -> u32 {
        1 << (2 * u32::from(self.0))
    }

    /// Chunks along one face edge, `2^level == sqrt(divisions)`.
    #[inline]
    #[must_use]
    pub fn chunks_per_axis(self) -> u32 {
        1 << self.0
    }
}

/// Grid points along one edge of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(u32);

impl Resolution {
    /// Fewest grid points that still form a quad.
    pub const MIN: u32 = 2;
    /// Most grid points per edge.
    pub const MAX: u32 = 256;

    /// Validate a raw resolution.
    pub fn new(resolution: i32) -> Result<Self, GeometryError> {
        u32::try_from(resolution)
            .ok()
            .filter(|r| (Self::MIN..=Self::MAX).contains(r))
            .map(Self)
            .ok_or(GeometryError::InvalidResolution(i64::from(resolution)))
    }

    /// The raw resolution.
    #[inline]
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Vertices in one chunk, `resolution²`.
    #[inline]
    #[must_use]
    pub fn vertex_count(self) -> usize {
        (self.0 * self.0) as usize
    }

    /// Quads in one chunk, `(resolution − 1)²`.
    #[inline]
    #[must_use]
    pub fn quad_count(self) -> usize {
        let edge = (self.0 - 1) as usize;
        edge * edge
    }

    /// Triangle-index entries in one chunk, `6 · (resolution − 1)²`.
    #[inline]
    #[must_use]
    pub fn index_count(self) -> usize {
        self.quad_count() * 6
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(10)
    }
}
