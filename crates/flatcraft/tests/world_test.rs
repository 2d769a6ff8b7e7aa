//! # World Tests
//!
//! Full path: catalogue TOML, generated map, repeated digs on real cells.

use std::sync::Arc;

use flatcraft::procedural::{GeneratorConfig, MapError, MapGenerator, StrataCellFactory, Stratum};
use flatcraft::resources::{ResourceCatalogue, ResourceError, Sprite, ToolType};
use flatcraft::{DigOutcome, World, WorldError};
use rand::rngs::mock::StepRng;

const CATALOGUE: &str = r#"
[[states]]
name = "ore"
sprite = "stone"
next = "rubble"

[[states]]
name = "rubble"
sprite = "cobblestone"

[[states]]
name = "turf"
sprite = "grass"
next = "dug"

[[states]]
name = "dug"
sprite = "air"
removed = true

[[resources]]
name = "stone"
tool = "pickaxe"
hardness = 2
state = "ore"

[[resources]]
name = "grass"
tool = "shovel"
hardness = 1
state = "turf"
"#;

const WORLD: &str = r#"
height = 8
width = 3
seed = 77

[strata.sub_soil]
resource = "stone"
background = "dirt-bg"

[strata.soil_surface]
resource = "grass"
background = "dirt-bg"

[strata.sky]
background = "sky"
"#;

/// Surface row of worlds built by [`world`].
const SURFACE: usize = 4;

/// Random source whose first draw over `0..height` is `row`.
fn surface_rng(height: usize, row: usize) -> StepRng {
    let step = u64::MAX / height as u64 + 1;
    StepRng::new(step * row as u64, 0)
}

fn seeded_world() -> World {
    let catalogue = ResourceCatalogue::from_toml_str(CATALOGUE).unwrap();
    let config = GeneratorConfig::from_toml_str(WORLD).unwrap();
    World::from_config(&config, Arc::new(catalogue)).unwrap()
}

/// Same config as [`seeded_world`], surface pinned to [`SURFACE`].
fn world() -> World {
    let catalogue = ResourceCatalogue::from_toml_str(CATALOGUE).unwrap();
    let config = GeneratorConfig::from_toml_str(WORLD).unwrap();
    let factory = StrataCellFactory::new(Arc::new(catalogue), &config.strata).unwrap();
    let mut generator = MapGenerator::with_rng(
        config.height,
        config.width,
        factory,
        surface_rng(config.height, SURFACE),
    )
    .unwrap();
    World::generate(&mut generator).unwrap()
}

/// Test: seeded worlds are reproducible.
#[test]
fn test_seeded_world_is_deterministic() {
    assert_eq!(seeded_world().map(), seeded_world().map());
    assert_eq!(seeded_world().surface_row(), seeded_world().surface_row());
}

/// Test: the injected random source places the surface.
#[test]
fn test_pinned_surface_row() {
    assert_eq!(world().surface_row(), SURFACE);
}

/// Test: strata line up with the reported surface row.
#[test]
fn test_world_layers() {
    let world = world();
    let surface = world.surface_row();
    assert!(surface < world.map().height());

    for ((row, _), cell) in world.map().iter() {
        let name = cell.resource().map(|r| r.name());
        match Stratum::of_row(row, surface) {
            Stratum::SubSoil => assert_eq!(name, Some("stone")),
            Stratum::SoilSurface => assert_eq!(name, Some("grass")),
            Stratum::Sky => assert_eq!(name, None),
        }
    }
}

/// Test: stone takes two hits, turns to rubble in place, then is collected.
#[test]
fn test_dig_stone_to_rubble() {
    let mut world = world();

    assert_eq!(
        world.dig_at(0, 1, ToolType::Pickaxe).unwrap(),
        DigOutcome::Hit { remaining: 1 }
    );
    assert_eq!(
        world.dig_at(0, 1, ToolType::Pickaxe).unwrap(),
        DigOutcome::Transformed {
            sprite: Sprite::new("cobblestone")
        }
    );
    let cell = world.map().get_at(0, 1).unwrap();
    assert_eq!(cell.sprite().map(Sprite::key), Some("cobblestone"));

    let DigOutcome::Collected(rubble) = world.dig_at(0, 1, ToolType::Pickaxe).unwrap() else {
        panic!("rubble should be collected");
    };
    assert_eq!(rubble.state().name(), "rubble");
    assert_eq!(
        world.map().get_at(0, 1).unwrap().sprite().map(Sprite::key),
        Some("dirt-bg")
    );

    // Neighbours are untouched.
    for (row, col) in [(0, 0), (0, 2), (1, 1)] {
        let neighbour = world.map().get_at(row, col).unwrap().resource().unwrap();
        assert_eq!(neighbour.hardness(), 2);
        assert_eq!(neighbour.state().name(), "ore");
    }
}

/// Test: surface grass is removed in one shovel dig.
#[test]
fn test_dig_grass_removes_it() {
    let mut world = world();
    let surface = world.surface_row();

    let DigOutcome::Removed(grass) = world.dig_at(surface, 2, ToolType::Shovel).unwrap() else {
        panic!("grass should be removed");
    };
    assert_eq!(grass.name(), "grass");
    assert!(grass.is_removed());
    assert!(!world.map().get_at(surface, 2).unwrap().has_resource());
}

/// Test: the wrong tool leaves the cell exactly as it was.
#[test]
fn test_wrong_tool_is_rejected() {
    let mut world = world();
    let surface = world.surface_row();
    let before = world.map().get_at(surface, 0).unwrap().clone();
    let grass = before.resource().unwrap();
    assert_eq!((grass.hardness(), grass.state().name()), (1, "turf"));

    assert_eq!(
        world.dig_at(surface, 0, ToolType::Axe).unwrap(),
        DigOutcome::WrongTool {
            required: ToolType::Shovel
        }
    );

    let after = world.map().get_at(surface, 0).unwrap();
    assert_eq!(after, &before);
    let grass = after.resource().unwrap();
    assert_eq!((grass.hardness(), grass.state().name()), (1, "turf"));
    assert_eq!(after.sprite().map(Sprite::key), Some("grass"));
}

/// Test: sky cells and out-of-range coordinates.
#[test]
fn test_sky_and_bounds() {
    let mut world = world();
    let top = world.map().height() - 1;
    assert_eq!(
        world.dig_at(top, 0, ToolType::Pickaxe).unwrap(),
        DigOutcome::Nothing
    );

    assert!(matches!(
        world.dig_at(top + 1, 0, ToolType::Pickaxe),
        Err(WorldError::Map(MapError::OutOfBounds { .. }))
    ));
    assert!(matches!(
        world.dig_at(0, 3, ToolType::Pickaxe),
        Err(WorldError::Map(MapError::OutOfBounds { .. }))
    ));
}

/// Test: a strata config naming an unknown resource fails at setup.
#[test]
fn test_unknown_resource_fails_setup() {
    let catalogue = ResourceCatalogue::from_toml_str(CATALOGUE).unwrap();
    let config = GeneratorConfig::from_toml_str(&WORLD.replace("\"grass\"", "\"clay\"")).unwrap();

    let err = World::from_config(&config, Arc::new(catalogue)).unwrap_err();
    assert_eq!(
        err,
        WorldError::Map(MapError::Resource(ResourceError::UnknownResource(
            "clay".to_string()
        )))
    );
}
