//! Headless planet generator.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tessera-demo -- --subdivisions 2 --resolution 32`.

use clap::Parser;
use tessera_config::{CONFIG_FILE_NAME, CliArgs, Config, default_config_dir};
use tessera_cubesphere::CubeFace;
use tessera_planet::{HeadlessBackend, Planet};
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides. Logging needs the
    // config, so a load failure is reported once the subscriber is up.
    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    tessera_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    match load_error {
        None => info!("Using config {}", config_dir.join(CONFIG_FILE_NAME).display()),
        Some(e) => warn!("Failed to load config: {e}, using defaults"),
    }

    info!(
        "Generating planet: subdivisions {}, resolution {}, normals {:?}, {} noise layers",
        config.planet.subdivisions,
        config.planet.resolution,
        config.planet.normal_mode,
        config.shape.noise_layers.len()
    );

    let mut planet = match Planet::new(
        config.planet.clone(),
        config.shape.clone(),
        config.colour.clone(),
        HeadlessBackend::new(),
    ) {
        Ok(planet) => planet,
        Err(e) => {
            error!("Failed to set up planet: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = planet.generate_planet() {
        error!("Planet generation failed: {e}");
        std::process::exit(1);
    }

    report(&planet);
}

fn report(planet: &Planet<HeadlessBackend>) {
    let tessellator = planet.tessellator();
    let Some(chunks) = tessellator.chunk_set() else {
        return;
    };

    for face in CubeFace::ALL {
        let start = face.index() * chunks.divisions() as usize;
        let meshes = &tessellator.buffers()[start..start + chunks.face(face).len()];
        let vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
        info!("Face {face}: {} chunks, {vertices} vertices", meshes.len());
    }

    let upload_bytes: usize = tessellator
        .buffers()
        .iter()
        .map(|m| m.vertex_bytes().len() + m.normal_bytes().len() + m.index_bytes().len())
        .sum();
    let stats = tessellator.stats();
    info!(
        "Planet ready: {} chunks, {} vertices, {} triangles, {:.1} KiB of mesh data, {} renderables",
        stats.chunks,
        stats.vertices,
        stats.triangles,
        upload_bytes as f64 / 1024.0,
        planet.backend().live_count()
    );
}
