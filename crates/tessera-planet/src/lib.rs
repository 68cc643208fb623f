//! Planet tessellation: builds the chunk set for all six cube faces, meshes
//! every chunk through a shape function, and keeps one render resource per
//! chunk alive across regenerations.

mod backend;
mod error;
mod planet;
mod tessellator;
mod worker;

pub use backend::{HeadlessBackend, RenderBackend, RenderSlot, RenderableId};
pub use error::PlanetError;
pub use planet::Planet;
pub use tessellator::{MeshStats, Tessellator};
