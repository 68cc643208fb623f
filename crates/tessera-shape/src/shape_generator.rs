//! Layered-noise shape generator.

use glam::DVec3;
use tessera_config::ShapeSettings;

use crate::{NoiseFilter, ShapeFunction};

/// Turns cube points into planet surface points using [`ShapeSettings`].
///
/// With `spherify` set the incoming point is first normalized onto the unit
/// sphere; otherwise elevation is applied to the raw cube point. The result
/// is `point · radius · (1 + elevation)`, where elevation is the first
/// enabled layer plus every later enabled layer, optionally masked by the
/// first layer's value.
pub struct ShapeGenerator {
    radius: f64,
    spherify: bool,
    filters: Vec<NoiseFilter>,
}

impl ShapeGenerator {
    pub fn new(settings: &ShapeSettings) -> Self {
        Self {
            radius: settings.radius,
            spherify: settings.spherify,
            filters: settings
                .noise_layers
                .iter()
                .cloned()
                .map(NoiseFilter::new)
                .collect(),
        }
    }

    /// Elevation above the base radius at a (projected) point, as a fraction of the radius.
    pub fn elevation(&self, point: DVec3) -> f64 {
        let Some((first, rest)) = self.filters.split_first() else {
            return 0.0;
        };

        // The first layer masks later ones even when it is disabled itself.
        let first_value = first.evaluate(point);
        let mut elevation = if first.settings().enabled {
            first_value
        } else {
            0.0
        };

        for filter in rest.iter().filter(|f| f.settings().enabled) {
            let mask = if filter.settings().use_first_layer_as_mask {
                first_value
            } else {
                1.0
            };
            elevation += filter.evaluate(point) * mask;
        }

        elevation
    }
}

impl ShapeFunction for ShapeGenerator {
    fn point_on_planet(&self, point: DVec3) -> DVec3 {
        let point = if self.spherify {
            point.try_normalize().unwrap_or(point)
        } else {
            point
        };
        point * self.radius * (1.0 + self.elevation(point))
    }
}
