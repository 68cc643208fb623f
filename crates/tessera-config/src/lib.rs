//! Configuration for the tessera planet generator.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap. Every struct tolerates missing and unknown fields so
//! older and newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    ColourSettings, Config, DebugConfig, NoiseLayerSettings, NormalMode, PlanetConfig,
    ShapeSettings, CONFIG_FILE_NAME, default_config_dir,
};
pub use error::ConfigError;
