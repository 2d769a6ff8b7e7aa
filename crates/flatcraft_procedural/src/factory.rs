//! # Strata Cell Factory
//!
//! The [`CellFactory`] used by real worlds: each stratum gets an optional
//! catalogue resource and an optional background sprite, both taken from
//! [`StrataConfig`]. Resource names are checked when the factory is built,
//! so cell creation itself cannot fail.

use std::sync::Arc;

use flatcraft_resources::{Resource, ResourceCatalogue, Sprite};

use crate::cell::{Cell, CellFactory, Stratum};
use crate::config::{StrataConfig, StratumConfig};
use crate::error::MapResult;

/// Pre-resolved archetype of one stratum.
#[derive(Clone, Debug)]
struct Archetype {
    background: Option<Sprite>,
    template: Option<Resource>,
}

impl Archetype {
    fn resolve(catalogue: &ResourceCatalogue, config: &StratumConfig) -> MapResult<Self> {
        let template = config
            .resource
            .as_deref()
            .map(|name| catalogue.create(name))
            .transpose()?;
        Ok(Self {
            background: config.background.as_deref().map(Sprite::new),
            template,
        })
    }

    fn instantiate(&self) -> Cell {
        let cell = Cell::new(self.background.clone());
        match &self.template {
            Some(resource) => cell.with_resource(resource.clone()),
            None => cell,
        }
    }
}

/// Catalogue-backed [`CellFactory`].
#[derive(Clone, Debug)]
pub struct StrataCellFactory {
    catalogue: Arc<ResourceCatalogue>,
    sub_soil: Archetype,
    soil_surface: Archetype,
    sky: Archetype,
}

impl StrataCellFactory {
    /// Builds a factory, resolving every configured resource name.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Resource(UnknownResource)` if a stratum names a
    /// resource missing from the catalogue.
    pub fn new(catalogue: Arc<ResourceCatalogue>, strata: &StrataConfig) -> MapResult<Self> {
        Ok(Self {
            sub_soil: Archetype::resolve(&catalogue, strata.get(Stratum::SubSoil))?,
            soil_surface: Archetype::resolve(&catalogue, strata.get(Stratum::SoilSurface))?,
            sky: Archetype::resolve(&catalogue, strata.get(Stratum::Sky))?,
            catalogue,
        })
    }

    /// Returns the catalogue resources are drawn from.
    #[must_use]
    pub fn catalogue(&self) -> &Arc<ResourceCatalogue> {
        &self.catalogue
    }
}

impl CellFactory for StrataCellFactory {
    fn create_sub_soil(&mut self) -> Cell {
        self.sub_soil.instantiate()
    }

    fn create_soil_surface(&mut self) -> Cell {
        self.soil_surface.instantiate()
    }

    fn create_sky(&mut self) -> Cell {
        self.sky.instantiate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;
    use flatcraft_resources::{ResourceError, StateTable, ToolType};

    fn catalogue() -> Arc<ResourceCatalogue> {
        let mut catalogue = ResourceCatalogue::new(StateTable::standard());
        catalogue
            .register("stone", ToolType::Pickaxe, 3, StateTable::ORE)
            .unwrap();
        catalogue
            .register("grass", ToolType::Shovel, 1, StateTable::BLOCK)
            .unwrap();
        Arc::new(catalogue)
    }

    fn strata() -> StrataConfig {
        StrataConfig {
            sub_soil: StratumConfig {
                resource: Some("stone".to_string()),
                background: Some("dirt-bg".to_string()),
            },
            soil_surface: StratumConfig {
                resource: Some("grass".to_string()),
                background: None,
            },
            sky: StratumConfig {
                resource: None,
                background: Some("sky".to_string()),
            },
        }
    }

    #[test]
    fn test_each_stratum_gets_its_archetype() {
        let mut factory = StrataCellFactory::new(catalogue(), &strata()).unwrap();

        let sub = factory.create_sub_soil();
        assert_eq!(sub.resource().map(Resource::name), Some("stone"));
        assert_eq!(sub.background().map(Sprite::key), Some("dirt-bg"));

        let surface = factory.create_soil_surface();
        assert_eq!(surface.resource().map(Resource::name), Some("grass"));
        assert!(surface.background().is_none());

        let sky = factory.create_sky();
        assert!(!sky.has_resource());
        assert_eq!(sky.sprite().map(Sprite::key), Some("sky"));
    }

    #[test]
    fn test_cells_own_independent_resources() {
        let mut factory = StrataCellFactory::new(catalogue(), &strata()).unwrap();

        let mut first = factory.create_sub_soil();
        first.resource_mut().unwrap().dig().unwrap();
        let second = factory.create_sub_soil();

        assert_eq!(first.resource().unwrap().hardness(), 2);
        assert_eq!(second.resource().unwrap().hardness(), 3);
    }

    #[test]
    fn test_unknown_resource_rejected() {
        let mut config = strata();
        config.sky.resource = Some("cloud".to_string());

        assert_eq!(
            StrataCellFactory::new(catalogue(), &config).unwrap_err(),
            MapError::Resource(ResourceError::UnknownResource("cloud".to_string()))
        );
    }

    #[test]
    fn test_empty_config_yields_empty_cells() {
        let mut factory = StrataCellFactory::new(catalogue(), &StrataConfig::default()).unwrap();
        assert_eq!(factory.create(Stratum::SubSoil), Cell::default());
        assert_eq!(factory.create(Stratum::Sky), Cell::default());
    }
}
