//! Chunk-set orchestration and render-resource ownership.

use tessera_config::NormalMode;
use tessera_cubesphere::{
    BasisTable, ChunkIndex, ChunkSet, CubeFace, Resolution, SubdivisionLevel,
};
use tessera_mesh::MeshBuffer;
use tessera_shape::ShapeFunction;
use tracing::{debug, info, warn};

use crate::worker::{build_meshes, worker_count};
use crate::{PlanetError, RenderBackend};

/// Totals across every chunk's current mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub chunks: usize,
    pub vertices: usize,
    pub triangles: usize,
}

/// Owns the chunk set, one mesh buffer per chunk, and the table mapping each
/// chunk to its render resource.
///
/// Buffers and resource handles are stored flat, face-major, at
/// [`ChunkIndex::flat`]. When a rebuild keeps the chunk count, every
/// existing handle and buffer stays at its index and is reused; when the
/// count changes, all handles are destroyed and the table is resized.
pub struct Tessellator<H> {
    bases: BasisTable,
    chunks: Option<ChunkSet>,
    buffers: Vec<MeshBuffer>,
    handles: Vec<Option<H>>,
    normal_mode: NormalMode,
    workers: usize,
}

impl<H: Clone + std::fmt::Debug> Tessellator<H> {
    /// Create a tessellator. Fails if any face basis is degenerate.
    ///
    /// `workers` is the meshing thread count; 0 picks one per logical CPU.
    pub fn new(normal_mode: NormalMode, workers: usize) -> Result<Self, PlanetError> {
        Ok(Self {
            bases: BasisTable::new()?,
            chunks: None,
            buffers: Vec::new(),
            handles: Vec::new(),
            normal_mode,
            workers: worker_count(workers),
        })
    }

    /// Compute the chunk descriptors of all six faces and make sure every
    /// chunk has a render resource.
    pub fn build_chunk_set<B>(
        &mut self,
        level: SubdivisionLevel,
        resolution: Resolution,
        backend: &mut B,
    ) -> Result<&ChunkSet, PlanetError>
    where
        B: RenderBackend<Handle = H>,
    {
        let chunks = ChunkSet::build(level, resolution);
        let previous = self.chunks.as_ref().map(ChunkSet::divisions);

        if previous != Some(chunks.divisions()) {
            let stale = self.release(backend);
            if stale > 0 {
                warn!(
                    "Chunk count changed ({:?} -> {} per face), discarded {} render resources",
                    previous,
                    chunks.divisions(),
                    stale
                );
            }
            self.handles.resize_with(chunks.len(), || None);
            self.buffers.resize_with(chunks.len(), MeshBuffer::new);
        }

        // Recorded before creation so a retry after a backend failure keeps
        // the handles already made and only fills the empty slots.
        let chunks = self.chunks.insert(chunks);

        let mut created = 0;
        for slot in self.handles.iter_mut().filter(|slot| slot.is_none()) {
            let handle = backend.create_renderable().inspect_err(|err| {
                warn!("Render resource creation failed after {created} new resources: {err}");
            })?;
            *slot = Some(handle);
            created += 1;
        }

        for face in CubeFace::ALL {
            debug!(face = %face, chunks = chunks.face(face).len(), "face chunk set");
        }
        info!(
            "Chunk set built: level {}, {} chunks ({} per face), resolution {}, {} new render resources",
            level.get(),
            chunks.len(),
            chunks.divisions(),
            resolution.get(),
            created
        );

        Ok(chunks)
    }

    /// Rebuild every chunk's mesh through `shape` and hand it to its render
    /// resource.
    pub fn regenerate<S, B>(&mut self, shape: &S, backend: &mut B) -> Result<(), PlanetError>
    where
        S: ShapeFunction + ?Sized,
        B: RenderBackend<Handle = H>,
    {
        let chunks = self.chunks.as_ref().ok_or(PlanetError::ChunkSetMissing)?;

        let start = std::time::Instant::now();
        build_meshes(
            chunks,
            &self.bases,
            self.normal_mode,
            shape,
            &mut self.buffers,
            self.workers,
        );
        let elapsed = start.elapsed();

        for (handle, buffer) in self.handles.iter().zip(&self.buffers) {
            if let Some(handle) = handle {
                backend.assign_mesh(handle, buffer)?;
            }
        }

        let stats = self.stats();
        info!(
            "Regenerated {} chunks: {} vertices, {} triangles in {:.2?} on {} workers",
            stats.chunks, stats.vertices, stats.triangles, elapsed, self.workers
        );
        Ok(())
    }

    /// Push one colour to every initialised render resource.
    pub fn apply_colour<B>(&self, colour: [f32; 4], backend: &mut B) -> Result<(), PlanetError>
    where
        B: RenderBackend<Handle = H>,
    {
        for handle in self.handles.iter().flatten() {
            backend.set_colour(handle, colour)?;
        }
        debug!(?colour, "colour applied");
        Ok(())
    }

    /// Destroy every render resource and forget the chunk set. Returns the
    /// number of resources destroyed.
    pub fn release<B>(&mut self, backend: &mut B) -> usize
    where
        B: RenderBackend<Handle = H>,
    {
        let mut destroyed = 0;
        for handle in self.handles.drain(..).flatten() {
            backend.destroy(handle);
            destroyed += 1;
        }
        self.buffers.clear();
        self.chunks = None;
        destroyed
    }

    pub fn set_normal_mode(&mut self, normal_mode: NormalMode) {
        self.normal_mode = normal_mode;
    }

    pub fn normal_mode(&self) -> NormalMode {
        self.normal_mode
    }

    /// Change the meshing thread count; 0 picks one per logical CPU.
    pub fn set_workers(&mut self, workers: usize) {
        self.workers = worker_count(workers);
    }

    /// Threads used by [`Self::regenerate`].
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The current chunk set, if one has been built.
    pub fn chunk_set(&self) -> Option<&ChunkSet> {
        self.chunks.as_ref()
    }

    /// Render resource of a chunk.
    pub fn handle(&self, index: ChunkIndex) -> Option<&H> {
        let chunks = self.chunks.as_ref()?;
        chunks.get(index)?;
        self.handles.get(index.flat(chunks.level()))?.as_ref()
    }

    /// All mesh buffers in face-major order.
    pub fn buffers(&self) -> &[MeshBuffer] {
        &self.buffers
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            chunks: self.buffers.len(),
            vertices: self.buffers.iter().map(MeshBuffer::vertex_count).sum(),
            triangles: self.buffers.iter().map(MeshBuffer::triangle_count).sum(),
        }
    }
}
