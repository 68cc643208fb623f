//! Grid mesh construction for one chunk.

use glam::DVec2;
use tessera_config::NormalMode;
use tessera_cubesphere::{Basis, ChunkDescriptor};
use tessera_shape::ShapeFunction;

use crate::MeshBuffer;
use crate::normals::{accumulate_triangle_normals, position_normals};

/// Builds the `resolution × resolution` vertex grid of a chunk and its
/// triangulation.
///
/// Each grid point `(x, y)` has parametric coordinate
/// `percent = (x, y) / (resolution − 1)`, is placed on the cube through
/// [`ChunkDescriptor::point_on_cube`], and is passed un-normalized to the
/// shape function. Any spherical projection is the shape function's job.
///
/// Every quad with lower-left index `i` is split into triangles
/// `(i, i + r + 1, i + r)` and `(i, i + 1, i + r + 1)`, whose geometric
/// normals point along `axis_a × axis_b = up`.
#[derive(Clone, Copy, Debug)]
pub struct ChunkMeshBuilder<'a> {
    descriptor: &'a ChunkDescriptor,
    basis: &'a Basis,
    normal_mode: NormalMode,
}

impl<'a> ChunkMeshBuilder<'a> {
    pub fn new(descriptor: &'a ChunkDescriptor, basis: &'a Basis, normal_mode: NormalMode) -> Self {
        Self {
            descriptor,
            basis,
            normal_mode,
        }
    }

    /// Build a fresh mesh.
    pub fn construct<S: ShapeFunction + ?Sized>(&self, shape: &S) -> MeshBuffer {
        let mut buffer = MeshBuffer::with_resolution(self.descriptor.resolution.get());
        self.construct_into(shape, &mut buffer);
        buffer
    }

    /// Rebuild `buffer` in place, reusing its allocations.
    pub fn construct_into<S: ShapeFunction + ?Sized>(&self, shape: &S, buffer: &mut MeshBuffer) {
        let resolution = self.descriptor.resolution.get();
        let last = resolution - 1;
        let step = f64::from(last);

        buffer.clear();
        buffer.vertices.reserve(self.descriptor.resolution.vertex_count());
        buffer.triangles.reserve(self.descriptor.resolution.index_count());

        for y in 0..resolution {
            for x in 0..resolution {
                let i = x + y * resolution;
                let percent = DVec2::new(f64::from(x), f64::from(y)) / step;
                let point_on_cube = self.descriptor.point_on_cube(self.basis, percent);
                buffer
                    .vertices
                    .push(shape.point_on_planet(point_on_cube).as_vec3().to_array());

                if x != last && y != last {
                    buffer.triangles.extend_from_slice(&[
                        i,
                        i + resolution + 1,
                        i + resolution,
                        i,
                        i + 1,
                        i + resolution + 1,
                    ]);
                }
            }
        }

        match self.normal_mode {
            NormalMode::Position => position_normals(&buffer.vertices, &mut buffer.normals),
            NormalMode::Computed => accumulate_triangle_normals(
                &buffer.vertices,
                &buffer.triangles,
                &mut buffer.normals,
            ),
        }
    }
}
