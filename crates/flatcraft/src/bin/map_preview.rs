//! # Map Preview
//!
//! Generates one world and prints it top row first, one character per cell.
//!
//! ```text
//! map_preview [world.toml] [catalogue.toml]
//! ```
//!
//! Without arguments the bundled `data/world.toml` and `data/catalogue.toml`
//! are used. Set `RUST_LOG=debug` to see generation and dig logs.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use flatcraft::procedural::{Cell, GeneratorConfig};
use flatcraft::resources::ResourceCatalogue;
use flatcraft::{World, WorldResult};
use tracing_subscriber::EnvFilter;

const DEFAULT_WORLD: &str = include_str!("../../../../data/world.toml");
const DEFAULT_CATALOGUE: &str = include_str!("../../../../data/catalogue.toml");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args.first().map(String::as_str), args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "map preview failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(world_path: Option<&str>, catalogue_path: Option<&str>) -> WorldResult<()> {
    let config = match world_path {
        Some(path) => GeneratorConfig::load(Path::new(path))?,
        None => GeneratorConfig::from_toml_str(DEFAULT_WORLD)?,
    };
    let catalogue = match catalogue_path {
        Some(path) => ResourceCatalogue::load(Path::new(path))?,
        None => ResourceCatalogue::from_toml_str(DEFAULT_CATALOGUE)?,
    };

    let world = World::from_config(&config, Arc::new(catalogue))?;
    tracing::info!(
        height = world.map().height(),
        width = world.map().width(),
        surface_row = world.surface_row(),
        "world generated"
    );

    for row in world.map().rows().rev() {
        let line: String = row.iter().map(glyph).collect();
        println!("{line}");
    }
    Ok(())
}

/// First letter of the visible sprite, upper-cased when a resource is present.
fn glyph(cell: &Cell) -> char {
    let Some(first) = cell.sprite().and_then(|s| s.key().chars().next()) else {
        return ' ';
    };
    if cell.has_resource() {
        first.to_ascii_uppercase()
    } else {
        first
    }
}
