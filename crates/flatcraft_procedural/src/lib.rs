//! # FLATCRAFT Procedural Generation
//!
//! Layered 2D terrain: sub-soil at the bottom, one surface row, sky above.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same map
//! 2. **Fully populated**: Every `(row, col)` holds exactly one cell
//! 3. **Swappable content**: Which resource a stratum carries is decided by
//!    a `CellFactory`, never by the generator
//! 4. **Fail fast**: Zero dimensions and out-of-range access are errors
//!
//! ## Core Components
//!
//! - `GameMap`: Fixed-size, bounds-checked grid
//! - `Cell`: Background sprite plus optional resource
//! - `CellFactory`: One creation call per stratum
//! - `MapGenerator`: Picks the surface row and fills the grid
//! - `StrataCellFactory`: Catalogue-backed factory driven by `GeneratorConfig`
//!
//! ## Example
//!
//! ```rust,ignore
//! use flatcraft_procedural::{GeneratorConfig, MapGenerator, StrataCellFactory};
//!
//! let config = GeneratorConfig::load("data/world.toml".as_ref())?;
//! let factory = StrataCellFactory::new(catalogue, &config.strata)?;
//! let mut generator = MapGenerator::from_config(&config, factory)?;
//!
//! let (map, surface) = generator.generate_with_surface()?;
//! assert!(surface < map.height());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cell;
pub mod config;
pub mod error;
pub mod factory;
pub mod generator;
pub mod map;
pub mod seed;

pub use cell::{Cell, CellFactory, Stratum};
pub use config::{GeneratorConfig, StrataConfig, StratumConfig};
pub use error::{MapError, MapResult};
pub use factory::StrataCellFactory;
pub use generator::MapGenerator;
pub use map::GameMap;
pub use seed::WorldSeed;
