//! Fractal simplex noise producing a non-negative elevation.
//!
//! Each octave samples simplex noise at `point · frequency + centre`, remaps
//! it from `[-1, 1]` to `[0, 1]`, and accumulates it with a decaying
//! amplitude. The sum is shifted down by `min_value`, floored at zero, and
//! scaled by `strength`.

use glam::DVec3;
use noise::{NoiseFn, Simplex};
use tessera_config::NoiseLayerSettings;

/// One evaluated noise layer.
pub struct NoiseFilter {
    noise: Simplex,
    settings: NoiseLayerSettings,
}

impl NoiseFilter {
    /// Create a filter for the given layer settings.
    pub fn new(settings: NoiseLayerSettings) -> Self {
        let noise = Simplex::new(settings.seed);
        Self { noise, settings }
    }

    /// Elevation at `point`, always `>= 0`.
    pub fn evaluate(&self, point: DVec3) -> f64 {
        let centre = DVec3::from_array(self.settings.centre);
        let mut total = 0.0;
        let mut frequency = self.settings.base_roughness;
        let mut amplitude = 1.0;

        for _ in 0..self.settings.layer_count {
            let p = point * frequency + centre;
            let v = self.noise.get([p.x, p.y, p.z]).clamp(-1.0, 1.0);
            total += (v + 1.0) * 0.5 * amplitude;

            frequency *= self.settings.roughness;
            amplitude *= self.settings.persistence;
        }

        (total - self.settings.min_value).max(0.0) * self.settings.strength
    }

    /// Upper bound of [`Self::evaluate`] (geometric amplitude sum).
    pub fn max_elevation(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.settings.layer_count {
            sum += amp;
            amp *= self.settings.persistence;
        }
        (sum - self.settings.min_value).max(0.0) * self.settings.strength
    }

    /// The settings this filter was built from.
    pub fn settings(&self) -> &NoiseLayerSettings {
        &self.settings
    }
}
