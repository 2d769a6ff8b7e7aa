//! # Map Generator
//!
//! Partitions a `height x width` grid into three strata:
//!
//! ```text
//! row h-1  ░░░░░░░░░░   sky           (rows > soil_height)
//!   ...    ░░░░░░░░░░
//! row s    ▀▀▀▀▀▀▀▀▀▀   soil surface  (row == soil_height)
//!   ...    ██████████
//! row 0    ██████████   sub-soil      (rows < soil_height)
//! ```
//!
//! `soil_height` is drawn uniformly from `[0, height)` once per map. The
//! same generator can be reused; each call draws again from its random
//! source, which is the only state it carries between maps.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::cell::{CellFactory, Stratum};
use crate::config::GeneratorConfig;
use crate::error::{MapError, MapResult};
use crate::map::GameMap;
use crate::seed::WorldSeed;

/// Builds populated [`GameMap`]s from a [`CellFactory`].
#[derive(Debug)]
pub struct MapGenerator<F, R = ChaCha8Rng> {
    /// Number of rows of every generated map.
    height: usize,
    /// Number of columns of every generated map.
    width: usize,
    /// Produces the cell archetype of each stratum.
    factory: F,
    /// Source of the surface row draw.
    rng: R,
}

impl<F: CellFactory> MapGenerator<F> {
    /// Creates a generator seeded from the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn new(height: usize, width: usize, factory: F) -> MapResult<Self> {
        Self::with_seed(height, width, factory, WorldSeed::from_time())
    }

    /// Creates a deterministic generator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn with_seed(height: usize, width: usize, factory: F, seed: WorldSeed) -> MapResult<Self> {
        Self::with_rng(height, width, factory, seed.rng())
    }

    /// Creates a generator from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn from_config(config: &GeneratorConfig, factory: F) -> MapResult<Self> {
        config.validate()?;
        Self::with_seed(config.height, config.width, factory, config.world_seed())
    }
}

impl<F: CellFactory, R: Rng> MapGenerator<F, R> {
    /// Creates a generator over an injected random source.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn with_rng(height: usize, width: usize, factory: F, rng: R) -> MapResult<Self> {
        if height == 0 || width == 0 {
            return Err(MapError::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            factory,
            rng,
        })
    }

    /// Returns the configured number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the configured number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the factory.
    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Consumes the generator, returning its factory.
    pub fn into_factory(self) -> F {
        self.factory
    }

    /// Generates a fully populated map.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` only if the grid cannot be allocated.
    pub fn generate(&mut self) -> MapResult<GameMap> {
        self.generate_with_surface().map(|(map, _)| map)
    }

    /// Generates a map and returns it with its surface row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` only if the grid cannot be allocated.
    pub fn generate_with_surface(&mut self) -> MapResult<(GameMap, usize)> {
        let soil_height = self.rng.gen_range(0..self.height);
        let factory = &mut self.factory;
        let map = GameMap::from_fn(self.height, self.width, |row, _| {
            factory.create(Stratum::of_row(row, soil_height))
        })?;

        tracing::debug!(
            height = self.height,
            width = self.width,
            soil_height,
            "map generated"
        );
        Ok((map, soil_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use flatcraft_resources::Sprite;
    use rand::rngs::mock::StepRng;

    /// Tags every cell with its stratum so tests can read the layout back.
    #[derive(Debug, Default)]
    struct Tagging {
        created: usize,
    }

    impl Tagging {
        fn tagged(&mut self, tag: &str) -> Cell {
            self.created += 1;
            Cell::new(Some(Sprite::new(tag)))
        }
    }

    impl CellFactory for Tagging {
        fn create_sub_soil(&mut self) -> Cell {
            self.tagged("sub")
        }

        fn create_soil_surface(&mut self) -> Cell {
            self.tagged("surface")
        }

        fn create_sky(&mut self) -> Cell {
            self.tagged("sky")
        }
    }

    fn tag(map: &GameMap, row: usize, col: usize) -> String {
        map.get_at(row, col)
            .unwrap()
            .background()
            .map(|s| s.key().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            MapGenerator::new(0, 5, Tagging::default()).unwrap_err(),
            MapError::InvalidDimensions { height: 0, width: 5 }
        );
        assert_eq!(
            MapGenerator::new(10, 0, Tagging::default()).unwrap_err(),
            MapError::InvalidDimensions { height: 10, width: 0 }
        );
    }

    #[test]
    fn test_oversized_map_fails_on_generate() {
        let mut generator =
            MapGenerator::with_seed(1 << 40, 1 << 20, Tagging::default(), WorldSeed::new(1))
                .unwrap();

        assert_eq!(
            generator.generate().unwrap_err(),
            MapError::InvalidDimensions {
                height: 1 << 40,
                width: 1 << 20
            }
        );
        assert_eq!(generator.into_factory().created, 0);
    }

    #[test]
    fn test_strata_layout() {
        let mut generator =
            MapGenerator::with_seed(10, 5, Tagging::default(), WorldSeed::new(7)).unwrap();
        let (map, soil_height) = generator.generate_with_surface().unwrap();

        assert!(soil_height < 10);
        assert_eq!(map.len(), 50);
        for ((row, col), _) in map.iter() {
            let expected = match Stratum::of_row(row, soil_height) {
                Stratum::SubSoil => "sub",
                Stratum::SoilSurface => "surface",
                Stratum::Sky => "sky",
            };
            assert_eq!(tag(&map, row, col), expected, "row {row} col {col}");
        }
        assert_eq!(generator.into_factory().created, 50);
    }

    #[test]
    fn test_injected_rng_controls_surface() {
        // StepRng(0, 0) always yields zero, so the surface is the bottom row.
        let mut generator =
            MapGenerator::with_rng(4, 3, Tagging::default(), StepRng::new(0, 0)).unwrap();
        let (map, soil_height) = generator.generate_with_surface().unwrap();

        assert_eq!(soil_height, 0);
        assert_eq!(tag(&map, 0, 2), "surface");
        assert_eq!(tag(&map, 1, 0), "sky");
        assert_eq!(tag(&map, 3, 1), "sky");
    }

    #[test]
    fn test_single_row_map_is_all_surface() {
        let mut generator =
            MapGenerator::with_seed(1, 8, Tagging::default(), WorldSeed::new(3)).unwrap();
        let (map, soil_height) = generator.generate_with_surface().unwrap();

        assert_eq!(soil_height, 0);
        assert!((0..8).all(|col| tag(&map, 0, col) == "surface"));
    }

    #[test]
    fn test_same_seed_same_map() {
        let mut a = MapGenerator::with_seed(32, 4, Tagging::default(), WorldSeed::new(99)).unwrap();
        let mut b = MapGenerator::with_seed(32, 4, Tagging::default(), WorldSeed::new(99)).unwrap();

        for _ in 0..5 {
            assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        }
    }

    #[test]
    fn test_reuse_draws_again() {
        let mut generator =
            MapGenerator::with_seed(64, 2, Tagging::default(), WorldSeed::new(5)).unwrap();

        let surfaces: Vec<usize> = (0..16)
            .map(|_| generator.generate_with_surface().unwrap().1)
            .collect();
        assert!(surfaces.iter().any(|&s| s != surfaces[0]));
        assert!(surfaces.iter().all(|&s| s < 64));
    }

    #[test]
    fn test_borrowed_factory() {
        let mut factory = Tagging::default();
        {
            let mut generator =
                MapGenerator::with_seed(3, 3, &mut factory, WorldSeed::new(1)).unwrap();
            generator.generate().unwrap();
        }
        assert_eq!(factory.created, 9);
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig::new(6, 2).with_seed(11);
        let mut generator = MapGenerator::from_config(&config, Tagging::default()).unwrap();

        assert_eq!(generator.height(), 6);
        assert_eq!(generator.width(), 2);
        assert_eq!(generator.generate().unwrap().len(), 12);
    }
}
