//! Top-level planet component: owns the settings, the tessellator and the
//! render backend, and reacts to settings changes.

use tessera_config::{ColourSettings, PlanetConfig, ShapeSettings};
use tessera_cubesphere::{Resolution, SubdivisionLevel};
use tessera_shape::ShapeGenerator;
use tracing::{debug, info};

use crate::{PlanetError, RenderBackend, Tessellator};

/// A generated planet.
///
/// [`Planet::generate_planet`] validates the configuration, (re)builds the
/// chunk set, meshes every chunk and applies the colour. The
/// `on_*_settings_updated` hooks do the partial work an editor triggers when
/// a settings object changes, but only while `auto_update` is enabled.
pub struct Planet<B: RenderBackend> {
    config: PlanetConfig,
    shape_settings: ShapeSettings,
    colour_settings: ColourSettings,
    shape: ShapeGenerator,
    tessellator: Tessellator<B::Handle>,
    backend: B,
}

impl<B: RenderBackend> Planet<B> {
    pub fn new(
        config: PlanetConfig,
        shape_settings: ShapeSettings,
        colour_settings: ColourSettings,
        backend: B,
    ) -> Result<Self, PlanetError> {
        let tessellator = Tessellator::new(config.normal_mode, config.workers)?;
        let shape = ShapeGenerator::new(&shape_settings);
        Ok(Self {
            config,
            shape_settings,
            colour_settings,
            shape,
            tessellator,
            backend,
        })
    }

    /// Build the chunk set, mesh every chunk and apply the colour.
    pub fn generate_planet(&mut self) -> Result<(), PlanetError> {
        self.initialize()?;
        self.generate_mesh()?;
        self.generate_colours()
    }

    /// Regenerate the mesh after the shape settings changed. Returns whether
    /// anything was regenerated.
    pub fn on_shape_settings_updated(&mut self) -> Result<bool, PlanetError> {
        if !self.config.auto_update {
            debug!("Shape settings changed, auto update disabled");
            return Ok(false);
        }
        self.initialize()?;
        self.generate_mesh()?;
        Ok(true)
    }

    /// Reapply the colour after the colour settings changed. Returns whether
    /// anything was updated.
    pub fn on_colour_settings_updated(&mut self) -> Result<bool, PlanetError> {
        if !self.config.auto_update {
            debug!("Colour settings changed, auto update disabled");
            return Ok(false);
        }
        self.initialize()?;
        self.generate_colours()?;
        Ok(true)
    }

    /// Validate the tessellation parameters, rebuild the shape generator
    /// and the chunk set.
    fn initialize(&mut self) -> Result<(), PlanetError> {
        let level = SubdivisionLevel::new(self.config.subdivisions)?;
        let resolution = Resolution::new(self.config.resolution)?;

        self.shape = ShapeGenerator::new(&self.shape_settings);
        self.tessellator.set_normal_mode(self.config.normal_mode);
        self.tessellator.set_workers(self.config.workers);
        self.tessellator
            .build_chunk_set(level, resolution, &mut self.backend)?;
        Ok(())
    }

    fn generate_mesh(&mut self) -> Result<(), PlanetError> {
        self.tessellator.regenerate(&self.shape, &mut self.backend)
    }

    fn generate_colours(&mut self) -> Result<(), PlanetError> {
        info!(colour = ?self.colour_settings.planet_colour, "Applying planet colour");
        self.tessellator
            .apply_colour(self.colour_settings.planet_colour, &mut self.backend)
    }

    /// Replace the tessellation settings. Takes effect on the next generation.
    pub fn set_config(&mut self, config: PlanetConfig) {
        self.config = config;
    }

    /// Replace the shape settings. Call [`Self::on_shape_settings_updated`] to apply.
    pub fn set_shape_settings(&mut self, settings: ShapeSettings) {
        self.shape_settings = settings;
    }

    /// Replace the colour settings. Call [`Self::on_colour_settings_updated`] to apply.
    pub fn set_colour_settings(&mut self, settings: ColourSettings) {
        self.colour_settings = settings;
    }

    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    pub fn shape_settings(&self) -> &ShapeSettings {
        &self.shape_settings
    }

    pub fn colour_settings(&self) -> &ColourSettings {
        &self.colour_settings
    }

    pub fn tessellator(&self) -> &Tessellator<B::Handle> {
        &self.tessellator
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Destroy all render resources and return the backend.
    pub fn into_backend(mut self) -> B {
        self.tessellator.release(&mut self.backend);
        self.backend
    }
}
