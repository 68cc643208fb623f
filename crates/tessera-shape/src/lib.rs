//! Shape functions: map a point near the unit cube onto the body's surface.

mod noise_filter;
mod shape_generator;

pub use noise_filter::NoiseFilter;
pub use shape_generator::ShapeGenerator;

use glam::DVec3;

/// Maps an un-normalized cube-surface point to a point on the body's surface.
///
/// Called once per grid vertex from several meshing threads at once, so it
/// must be a pure function of the input point and its own settings.
pub trait ShapeFunction: Send + Sync {
    /// Surface point for `point`.
    fn point_on_planet(&self, point: DVec3) -> DVec3;
}

impl<F> ShapeFunction for F
where
    F: Fn(DVec3) -> DVec3 + Send + Sync,
{
    fn point_on_planet(&self, point: DVec3) -> DVec3 {
        self(point)
    }
}

/// Returns every point unchanged, leaving the mesh on the cube.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityShape;

impl ShapeFunction for IdentityShape {
    fn point_on_planet(&self, point: DVec3) -> DVec3 {
        point
    }
}
