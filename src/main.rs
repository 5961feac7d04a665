mod cli;

use std::error::Error;

use clap::Parser;
use cubix_blocks::MaterialRegistry;
use cubix_runtime::{NullBackend, WorldContext};
use cubix_world::{WorldConfig, load_config_from_path};

use crate::cli::Args;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => WorldConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.validate()?;

    let registry = match &args.materials {
        Some(path) => MaterialRegistry::from_path(path)?,
        None => MaterialRegistry::builtin(),
    };
    log::info!(
        "{} materials, radius {}, seed {}",
        registry.len(),
        config.radius,
        config.seed
    );

    let mut world = WorldContext::new(config, registry, NullBackend::new());
    world.init()?;

    let mut rejected = 0usize;
    for edit in &args.edits {
        match world.apply(*edit) {
            Ok(out) => log::info!("{edit}: {} splits rebuilt", out.regenerated.len()),
            Err(e) => {
                rejected += 1;
                log::warn!("{edit}: {e}");
            }
        }
    }
    for light in &args.lights {
        match world.set_block_light(light.x, light.y, light.z, light.level) {
            Ok(rebuilt) => log::info!(
                "light {} at ({}, {}, {}): {} splits rebuilt",
                light.level,
                light.x,
                light.y,
                light.z,
                rebuilt.len()
            ),
            Err(e) => {
                rejected += 1;
                log::warn!("light at ({}, {}, {}): {e}", light.x, light.y, light.z);
            }
        }
    }

    let stats = world.stats();
    let backend = world.backend();
    println!("chunks:          {}", stats.chunks);
    println!("table capacity:  {}", stats.table_capacity);
    println!("faces:           {}", stats.faces);
    println!("live splits:     {}", backend.live_splits());
    println!("uploads:         {}", backend.uploads);
    println!("rejected:        {rejected}");
    world.shutdown();
    Ok(())
}
