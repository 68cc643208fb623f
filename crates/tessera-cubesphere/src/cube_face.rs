//! The six faces of the generating cube.

use glam::DVec3;

/// The six faces of the cube that is tessellated into the planet surface.
///
/// Each variant corresponds to a face whose outward "local up" direction
/// points along the named axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`Self::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward-pointing unit direction of this face; the face centre on the
    /// `[-1, 1]` cube.
    #[must_use]
    pub fn up(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        };
        f.write_str(name)
    }
}
