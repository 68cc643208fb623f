//! Render-resource collaborator.
//!
//! The tessellator never looks inside a handle; it only creates one per
//! chunk, hands it mesh data and colours, and destroys it when the chunk
//! disappears.

use std::collections::HashMap;

use tessera_mesh::MeshBuffer;

use crate::PlanetError;

/// Creates and updates renderable objects on behalf of the tessellator.
pub trait RenderBackend {
    /// Opaque reference to one renderable.
    type Handle: Clone + std::fmt::Debug;

    /// Create a renderable with an empty mesh.
    fn create_renderable(&mut self) -> Result<Self::Handle, PlanetError>;

    /// Replace the renderable's vertices, triangles and normals.
    fn assign_mesh(&mut self, handle: &Self::Handle, mesh: &MeshBuffer) -> Result<(), PlanetError>;

    /// Set the renderable's material colour (linear RGBA).
    fn set_colour(&mut self, handle: &Self::Handle, colour: [f32; 4]) -> Result<(), PlanetError>;

    /// Release the renderable.
    fn destroy(&mut self, handle: Self::Handle);
}

/// Handle issued by [`HeadlessBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableId(pub u32);

/// State of one renderable held by [`HeadlessBackend`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderSlot {
    /// Last mesh assigned.
    pub mesh: MeshBuffer,
    /// Last colour assigned, if any.
    pub colour: Option<[f32; 4]>,
    /// Number of `assign_mesh` calls received.
    pub mesh_updates: u32,
}

/// In-memory backend with no GPU behind it.
///
/// Stores the latest mesh and colour of every live renderable and counts
/// creations and destructions, which makes it useful for tools and tests.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u32,
    slots: HashMap<RenderableId, RenderSlot>,
    created: u32,
    destroyed: u32,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a live renderable.
    pub fn slot(&self, id: RenderableId) -> Option<&RenderSlot> {
        self.slots.get(&id)
    }

    /// Number of live renderables.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Renderables created so far.
    pub fn created_count(&self) -> u32 {
        self.created
    }

    /// Renderables destroyed so far.
    pub fn destroyed_count(&self) -> u32 {
        self.destroyed
    }

    /// Iterate over live renderables.
    pub fn slots(&self) -> impl Iterator<Item = (&RenderableId, &RenderSlot)> {
        self.slots.iter()
    }

    fn slot_mut(&mut self, id: RenderableId) -> Result<&mut RenderSlot, PlanetError> {
        self.slots
            .get_mut(&id)
            .ok_or_else(|| PlanetError::Backend(format!("unknown renderable {}", id.0)))
    }
}

impl RenderBackend for HeadlessBackend {
    type Handle = RenderableId;

    fn create_renderable(&mut self) -> Result<RenderableId, PlanetError> {
        let id = RenderableId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| PlanetError::Backend("renderable ids exhausted".to_string()))?;
        self.slots.insert(id, RenderSlot::default());
        self.created += 1;
        Ok(id)
    }

    fn assign_mesh(&mut self, handle: &RenderableId, mesh: &MeshBuffer) -> Result<(), PlanetError> {
        let slot = self.slot_mut(*handle)?;
        slot.mesh.clone_from(mesh);
        slot.mesh_updates += 1;
        Ok(())
    }

    fn set_colour(&mut self, handle: &RenderableId, colour: [f32; 4]) -> Result<(), PlanetError> {
        self.slot_mut(*handle)?.colour = Some(colour);
        Ok(())
    }

    fn destroy(&mut self, handle: RenderableId) {
        if self.slots.remove(&handle).is_some() {
            self.destroyed += 1;
        }
    }
}
