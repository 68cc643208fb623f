//! Parallel chunk meshing.
//!
//! Chunk builds are independent: each reads its own descriptor, the shared
//! basis table and the shape function, and writes only its own buffer. Jobs
//! pair a descriptor with a mutable borrow of its buffer and are drained from
//! a crossbeam channel by scoped worker threads. The calling thread drains
//! too, so the build completes even if no worker could be spawned. The scope
//! end is the join barrier.

use crossbeam_channel::{Receiver, SendError};
use tessera_config::NormalMode;
use tessera_cubesphere::{BasisTable, ChunkDescriptor, ChunkSet};
use tessera_mesh::{ChunkMeshBuilder, MeshBuffer};
use tessera_shape::ShapeFunction;
use tracing::warn;

type Job<'a> = (&'a ChunkDescriptor, &'a mut MeshBuffer);

/// Number of threads to use for `requested` (0 = one per logical CPU).
pub(crate) fn worker_count(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested
    }
}

/// Rebuild `buffers[i]` from `chunks.descriptors()[i]` for every chunk.
pub(crate) fn build_meshes<S>(
    chunks: &ChunkSet,
    bases: &BasisTable,
    normal_mode: NormalMode,
    shape: &S,
    buffers: &mut [MeshBuffer],
    workers: usize,
) where
    S: ShapeFunction + ?Sized,
{
    debug_assert_eq!(chunks.len(), buffers.len());

    let threads = workers.min(buffers.len());
    if threads <= 1 {
        for (descriptor, buffer) in chunks.iter().zip(buffers.iter_mut()) {
            build_one(descriptor, bases, normal_mode, shape, buffer);
        }
        return;
    }

    let (sender, receiver) = crossbeam_channel::bounded::<Job<'_>>(buffers.len());
    for job in chunks.iter().zip(buffers.iter_mut()) {
        // Capacity equals the job count, so this never blocks. The receiver
        // is still held here; build inline if the job comes back anyway.
        if let Err(SendError((descriptor, buffer))) = sender.send(job) {
            build_one(descriptor, bases, normal_mode, shape, buffer);
        }
    }
    drop(sender);

    std::thread::scope(|scope| {
        // The calling thread is the last worker.
        for n in 1..threads {
            let receiver = receiver.clone();
            let spawned = std::thread::Builder::new()
                .name(format!("mesh-worker-{n}"))
                .spawn_scoped(scope, move || {
                    drain(&receiver, bases, normal_mode, shape);
                });
            if let Err(err) = spawned {
                warn!("Failed to spawn meshing worker {n}: {err}");
                break;
            }
        }
        drain(&receiver, bases, normal_mode, shape);
    });
}

fn drain<S>(receiver: &Receiver<Job<'_>>, bases: &BasisTable, normal_mode: NormalMode, shape: &S)
where
    S: ShapeFunction + ?Sized,
{
    while let Ok((descriptor, buffer)) = receiver.recv() {
        build_one(descriptor, bases, normal_mode, shape, buffer);
    }
}

fn build_one<S>(
    descriptor: &ChunkDescriptor,
    bases: &BasisTable,
    normal_mode: NormalMode,
    shape: &S,
    buffer: &mut MeshBuffer,
) where
    S: ShapeFunction + ?Sized,
{
    ChunkMeshBuilder::new(descriptor, bases.get(descriptor.face()), normal_mode)
        .construct_into(shape, buffer);
}
