//! # World
//!
//! A generated map plus the controller that applies player dig actions.
//!
//! ## One Dig Action
//!
//! ```text
//! dig_at(row, col, tool)
//!    │
//!    ├── empty cell ─────────────────────────────> Nothing
//!    ├── wrong tool ─────────────────────────────> WrongTool
//!    ├── hardness > 0 ──> dig() ──> still > 0 ───> Hit
//!    │                       │
//!    │                       ▼ reached 0
//!    └── hardness == 0 ──> terminal state? ──yes─> Collected (taken out)
//!                             │ no
//!                             ▼
//!                        dig_block() ──> removed? ──yes─> Removed (taken out)
//!                                           │ no
//!                                           ▼
//!                                      Transformed (stays in cell)
//! ```
//!
//! The resource itself never decides to leave the map; this layer owns that
//! boundary.

use std::sync::Arc;

use flatcraft_procedural::{
    CellFactory, GameMap, GeneratorConfig, MapGenerator, StrataCellFactory,
};
use flatcraft_resources::{Resource, ResourceCatalogue, Sprite, ToolType};
use rand::Rng;

use crate::error::WorldResult;

/// Result of a single dig action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigOutcome {
    /// The cell holds no resource.
    Nothing,
    /// The held tool cannot affect this resource. Nothing changed.
    WrongTool {
        /// Tool the resource requires.
        required: ToolType,
    },
    /// One hit landed; the resource is not extracted yet.
    Hit {
        /// Hardness left after this hit.
        remaining: u32,
    },
    /// The resource moved to its next state and stays in the cell.
    Transformed {
        /// Sprite of the new state.
        sprite: Sprite,
    },
    /// The resource reached its removal marker and was taken out of the cell.
    Removed(Resource),
    /// The resource was already terminal and was taken out of the cell.
    Collected(Resource),
}

/// A generated map and its surface row.
#[derive(Clone, Debug)]
pub struct World {
    map: GameMap,
    surface_row: usize,
}

impl World {
    /// Wraps an existing map.
    #[must_use]
    pub const fn new(map: GameMap, surface_row: usize) -> Self {
        Self { map, surface_row }
    }

    /// Generates a world with the given generator.
    ///
    /// # Errors
    ///
    /// Propagates generator errors.
    pub fn generate<F: CellFactory, R: Rng>(
        generator: &mut MapGenerator<F, R>,
    ) -> WorldResult<Self> {
        let (map, surface_row) = generator.generate_with_surface()?;
        Ok(Self::new(map, surface_row))
    }

    /// Generates a world from a config and catalogue.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` on zero dimensions
    /// - `UnknownResource` if the strata name a resource missing from the catalogue
    pub fn from_config(
        config: &GeneratorConfig,
        catalogue: Arc<ResourceCatalogue>,
    ) -> WorldResult<Self> {
        let factory = StrataCellFactory::new(catalogue, &config.strata)?;
        let mut generator = MapGenerator::from_config(config, factory)?;
        Self::generate(&mut generator)
    }

    /// Returns the map.
    #[must_use]
    pub const fn map(&self) -> &GameMap {
        &self.map
    }

    /// Returns the map mutably.
    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    /// Returns the soil surface row.
    #[must_use]
    pub const fn surface_row(&self) -> usize {
        self.surface_row
    }

    /// Consumes the world, returning its map.
    #[must_use]
    pub fn into_map(self) -> GameMap {
        self.map
    }

    /// Applies one dig action with `tool` to the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside the map. Resource errors are passed
    /// through unchanged.
    pub fn dig_at(&mut self, row: usize, col: usize, tool: ToolType) -> WorldResult<DigOutcome> {
        let cell = self.map.get_at_mut(row, col)?;
        let Some(resource) = cell.resource_mut() else {
            return Ok(DigOutcome::Nothing);
        };

        let required = resource.tool_type();
        if !required.accepts(tool) {
            tracing::warn!(row, col, %required, held = %tool, "dig rejected: wrong tool");
            return Ok(DigOutcome::WrongTool { required });
        }

        if !resource.is_extracted() {
            resource.dig()?;
            if !resource.is_extracted() {
                return Ok(DigOutcome::Hit {
                    remaining: resource.hardness(),
                });
            }
        }

        let terminal = resource.state().is_terminal();
        if !terminal {
            let next = resource.dig_block()?;
            if !next.is_removed() {
                return Ok(DigOutcome::Transformed {
                    sprite: next.sprite().clone(),
                });
            }
        }

        let outcome = cell.take_resource().map_or(DigOutcome::Nothing, |taken| {
            tracing::debug!(row, col, resource = taken.name(), "resource taken out");
            if terminal {
                DigOutcome::Collected(taken)
            } else {
                DigOutcome::Removed(taken)
            }
        });
        Ok(outcome)
    }
}
