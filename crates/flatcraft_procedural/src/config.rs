//! # Generator Configuration
//!
//! Map dimensions, seed, and stratum wiring, loaded once at startup.
//!
//! ```toml
//! height = 10
//! width = 5
//! seed = 42
//!
//! [strata.sub_soil]
//! resource = "stone"
//! background = "dirt-bg"
//!
//! [strata.soil_surface]
//! resource = "grass"
//!
//! [strata.sky]
//! background = "sky"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::Stratum;
use crate::error::{MapError, MapResult};
use crate::seed::WorldSeed;

/// What a single stratum's cells contain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StratumConfig {
    /// Catalogue name of the embedded resource, if any.
    pub resource: Option<String>,
    /// Background sprite key, if any.
    pub background: Option<String>,
}

/// Wiring for all three strata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrataConfig {
    /// Cells below the surface.
    pub sub_soil: StratumConfig,
    /// The surface row.
    pub soil_surface: StratumConfig,
    /// Cells above the surface.
    pub sky: StratumConfig,
}

impl StrataConfig {
    /// Returns the config for one stratum.
    #[must_use]
    pub const fn get(&self, stratum: Stratum) -> &StratumConfig {
        match stratum {
            Stratum::SubSoil => &self.sub_soil,
            Stratum::SoilSurface => &self.soil_surface,
            Stratum::Sky => &self.sky,
        }
    }
}

/// Configuration for [`MapGenerator`](crate::MapGenerator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Fixed seed; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// Stratum wiring for the catalogue-backed factory.
    pub strata: StrataConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            height: Self::DEFAULT_HEIGHT,
            width: Self::DEFAULT_WIDTH,
            seed: None,
            strata: StrataConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default number of rows.
    pub const DEFAULT_HEIGHT: usize = 16;

    /// Default number of columns.
    pub const DEFAULT_WIDTH: usize = 32;

    /// Creates a config with the given dimensions and no seed.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Sets a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the seed to generate with.
    #[must_use]
    pub fn world_seed(&self) -> WorldSeed {
        self.seed.map_or_else(WorldSeed::from_time, WorldSeed::new)
    }

    /// Parses and validates a config document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML and `InvalidDimensions` on
    /// zero dimensions.
    pub fn from_toml_str(source: &str) -> MapResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| MapError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read, or any error of
    /// [`GeneratorConfig::from_toml_str`].
    pub fn load(path: &Path) -> MapResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            MapError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks the dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if height or width is zero.
    pub fn validate(&self) -> MapResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(MapError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}
