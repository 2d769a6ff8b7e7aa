//! # Resource Catalogue
//!
//! Resource templates and their state table, loaded from TOML.
//! Everything is validated at load time; `create` never fails for a name
//! the catalogue reports as known.
//!
//! ## File Format
//!
//! ```toml
//! [[states]]
//! name = "ore"
//! sprite = "stone"
//! next = "rubble"
//!
//! [[states]]
//! name = "rubble"
//! sprite = "cobblestone"
//!
//! [[states]]
//! name = "gone"
//! sprite = "air"
//! removed = true
//!
//! [[resources]]
//! name = "stone"
//! tool = "pickaxe"
//! hardness = 3
//! state = "ore"
//! ```
//!
//! A state with neither `next` nor `removed` is stable.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ResourceError, ResourceResult};
use crate::resource::Resource;
use crate::state::{StateTable, StateTableBuilder};
use crate::tool::ToolType;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogueFile {
    #[serde(default)]
    states: Vec<StateEntry>,
    #[serde(default)]
    resources: Vec<ResourceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StateEntry {
    name: String,
    sprite: String,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    removed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceEntry {
    name: String,
    #[serde(default)]
    tool: ToolType,
    hardness: i64,
    state: String,
}

/// Validated set of resource templates sharing one state table.
#[derive(Debug)]
pub struct ResourceCatalogue {
    /// Transition table shared by every resource created here.
    table: Arc<StateTable>,
    /// Templates indexed by name.
    templates: HashMap<String, Resource>,
    /// Names in registration order.
    order: Vec<String>,
}

impl ResourceCatalogue {
    /// Creates an empty catalogue over the given state table.
    #[must_use]
    pub fn new(table: Arc<StateTable>) -> Self {
        Self {
            table,
            templates: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Parses and validates a catalogue document.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the TOML is malformed or a state is both
    ///   transitional and removed
    /// - any state-table or registration error
    pub fn from_toml_str(source: &str) -> ResourceResult<Self> {
        let file: CatalogueFile =
            toml::from_str(source).map_err(|e| ResourceError::InvalidConfig(e.to_string()))?;

        let mut builder = StateTableBuilder::new();
        for entry in file.states {
            builder = match (entry.next, entry.removed) {
                (Some(next), false) => builder.transitional(entry.name, entry.sprite, next),
                (None, false) => builder.stable(entry.name, entry.sprite),
                (None, true) => builder.removed(entry.name, entry.sprite),
                (Some(_), true) => {
                    return Err(ResourceError::InvalidConfig(format!(
                        "state {} cannot have a successor and be removed",
                        entry.name
                    )));
                }
            };
        }

        let mut catalogue = Self::new(builder.build()?);
        for entry in file.resources {
            catalogue.register(entry.name, entry.tool, entry.hardness, &entry.state)?;
        }

        tracing::debug!(
            states = catalogue.table.len(),
            resources = catalogue.len(),
            "resource catalogue loaded"
        );
        Ok(catalogue)
    }

    /// Reads and validates a catalogue file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read, or any error of
    /// [`ResourceCatalogue::from_toml_str`].
    pub fn load(path: &Path) -> ResourceResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            ResourceError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Registers a resource template.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if the name is taken
    /// - `UnknownState` if the initial state is not in the table
    /// - `NegativeHardness` if hardness is below zero
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tool_type: ToolType,
        hardness: i64,
        state: &str,
    ) -> ResourceResult<()> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(ResourceError::DuplicateName(name));
        }

        let initial = self.table.state(state)?;
        let template = Resource::new(name.clone(), tool_type, hardness, initial)?;
        self.order.push(name.clone());
        self.templates.insert(name, template);
        Ok(())
    }

    /// Creates a fresh resource from the named template.
    ///
    /// # Errors
    ///
    /// Returns `UnknownResource` if no template has that name.
    pub fn create(&self, name: &str) -> ResourceResult<Resource> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::UnknownResource(name.to_string()))
    }

    /// Returns true if a template with that name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns template names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the shared state table.
    #[must_use]
    pub fn states(&self) -> &Arc<StateTable> {
        &self.table
    }

    /// Returns the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no templates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
