//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tessellation settings.
    pub planet: PlanetConfig,
    /// Shape-function settings, passed opaquely to the shape generator.
    pub shape: ShapeSettings,
    /// Colour settings, passed opaquely to the render backend.
    pub colour: ColourSettings,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How per-vertex normals are produced for a chunk mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
pub enum NormalMode {
    /// Normals equal the un-normalized vertex positions.
    #[default]
    Position,
    /// Area-weighted average of adjacent triangle normals, normalized.
    Computed,
}

/// Tessellation configuration.
///
/// `subdivisions` and `resolution` are kept as plain signed integers, the way
/// an editor exposes them; they are validated when a chunk set is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Quad-tree depth per face. Each face is split into `4^subdivisions` chunks.
    pub subdivisions: i32,
    /// Grid points along one edge of a chunk (2..=256).
    pub resolution: i32,
    /// Regenerate automatically when shape or colour settings change.
    pub auto_update: bool,
    /// Normal generation strategy.
    pub normal_mode: NormalMode,
    /// Meshing worker threads. 0 picks the number of logical CPUs.
    pub workers: usize,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            subdivisions: 0,
            resolution: 10,
            auto_update: true,
            normal_mode: NormalMode::Position,
            workers: 0,
        }
    }
}

/// Settings consumed by the shape generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapeSettings {
    /// Base radius of the body.
    pub radius: f64,
    /// Normalize incoming cube points onto the unit sphere before applying elevation.
    pub spherify: bool,
    /// Elevation layers, evaluated in order.
    pub noise_layers: Vec<NoiseLayerSettings>,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            radius: 1.0,
            spherify: true,
            noise_layers: Vec::new(),
        }
    }
}

/// One layer of fractal simplex noise contributing to elevation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseLayerSettings {
    /// Disabled layers contribute nothing.
    pub enabled: bool,
    /// Multiply this layer by the first layer's output.
    pub use_first_layer_as_mask: bool,
    /// Noise seed.
    pub seed: u32,
    /// Final multiplier applied to the layer's elevation.
    pub strength: f64,
    /// Number of octaves.
    pub layer_count: u32,
    /// Frequency of the first octave.
    pub base_roughness: f64,
    /// Frequency multiplier between octaves.
    pub roughness: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Sample-space offset.
    pub centre: [f64; 3],
    /// Elevation floor; values below it are flattened to zero.
    pub min_value: f64,
}

impl Default for NoiseLayerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            use_first_layer_as_mask: false,
            seed: 0,
            strength: 1.0,
            layer_count: 1,
            base_roughness: 1.0,
            roughness: 2.0,
            persistence: 0.5,
            centre: [0.0; 3],
            min_value: 0.0,
        }
    }
}

/// Settings consumed by the colour/material step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColourSettings {
    /// Linear RGBA colour applied to every chunk.
    pub planet_colour: [f32; 4],
}

impl Default for ColourSettings {
    fn default() -> Self {
        Self {
            planet_colour: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for tessera, e.g. `~/.config/tessera` on Linux.
///
/// Falls back to the working directory when the platform has no config dir.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("tessera"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

/// Settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

fn read_settings(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_settings(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path,
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let new_config = read_settings(&config_path)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
