//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, NormalMode};

/// Tessera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tessera", about = "Cube-sphere planet mesh generator")]
pub struct CliArgs {
    /// Quad-tree subdivision depth per cube face.
    #[arg(long)]
    pub subdivisions: Option<i32>,

    /// Grid points along one chunk edge (2-256).
    #[arg(long)]
    pub resolution: Option<i32>,

    /// Normal generation strategy.
    #[arg(long, value_enum)]
    pub normal_mode: Option<NormalMode>,

    /// Meshing worker threads (0 = one per CPU).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(s) = args.subdivisions {
            self.planet.subdivisions = s;
        }
        if let Some(r) = args.resolution {
            self.planet.resolution = r;
        }
        if let Some(mode) = args.normal_mode {
            self.planet.normal_mode = mode;
        }
        if let Some(w) = args.workers {
            self.planet.workers = w;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
