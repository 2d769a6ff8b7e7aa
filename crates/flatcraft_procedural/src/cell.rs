//! # Cells
//!
//! A cell is one slot of the map: an optional background sprite and an
//! optional resource it exclusively owns.
//!
//! Which resource each stratum carries is decided by a [`CellFactory`]; the
//! generator only knows the three creation calls.

use flatcraft_resources::{Resource, Sprite};

/// Horizontal band of the map sharing one cell archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stratum {
    /// Deep, resource-rich layer below the surface.
    SubSoil,
    /// The single boundary row (grass, topsoil).
    SoilSurface,
    /// Open air above the surface.
    Sky,
}

impl Stratum {
    /// Classifies a row given the surface row.
    #[inline]
    #[must_use]
    pub fn of_row(row: usize, soil_height: usize) -> Self {
        match row.cmp(&soil_height) {
            std::cmp::Ordering::Less => Self::SubSoil,
            std::cmp::Ordering::Equal => Self::SoilSurface,
            std::cmp::Ordering::Greater => Self::Sky,
        }
    }
}

/// A single map slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Drawn when no resource is present.
    background: Option<Sprite>,
    /// Extractable content, if any.
    resource: Option<Resource>,
}

impl Cell {
    /// Creates an empty cell with an optional background.
    #[must_use]
    pub const fn new(background: Option<Sprite>) -> Self {
        Self {
            background,
            resource: None,
        }
    }

    /// Adds a resource to this cell.
    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Returns the background sprite.
    #[must_use]
    pub fn background(&self) -> Option<&Sprite> {
        self.background.as_ref()
    }

    /// Returns the sprite to draw: the resource's if any, else the background.
    #[must_use]
    pub fn sprite(&self) -> Option<&Sprite> {
        self.resource
            .as_ref()
            .map(Resource::sprite)
            .or(self.background.as_ref())
    }

    /// Returns the resource, if any.
    #[must_use]
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    /// Returns the resource mutably, if any.
    pub fn resource_mut(&mut self) -> Option<&mut Resource> {
        self.resource.as_mut()
    }

    /// Returns true if the cell carries a resource.
    #[must_use]
    pub const fn has_resource(&self) -> bool {
        self.resource.is_some()
    }

    /// Removes and returns the resource.
    pub fn take_resource(&mut self) -> Option<Resource> {
        self.resource.take()
    }

    /// Places a resource, returning the one it replaces.
    pub fn set_resource(&mut self, resource: Resource) -> Option<Resource> {
        self.resource.replace(resource)
    }
}

/// Produces the cell archetype of each stratum.
///
/// Each call returns a fresh, independently owned cell.
pub trait CellFactory {
    /// Creates a cell below the surface.
    fn create_sub_soil(&mut self) -> Cell;

    /// Creates a surface cell.
    fn create_soil_surface(&mut self) -> Cell;

    /// Creates a sky cell.
    fn create_sky(&mut self) -> Cell;

    /// Creates the archetype for `stratum`.
    fn create(&mut self, stratum: Stratum) -> Cell {
        match stratum {
            Stratum::SubSoil => self.create_sub_soil(),
            Stratum::SoilSurface => self.create_soil_surface(),
            Stratum::Sky => self.create_sky(),
        }
    }
}

impl<F: CellFactory + ?Sized> CellFactory for &mut F {
    fn create_sub_soil(&mut self) -> Cell {
        (**self).create_sub_soil()
    }

    fn create_soil_surface(&mut self) -> Cell {
        (**self).create_soil_surface()
    }

    fn create_sky(&mut self) -> Cell {
        (**self).create_sky()
    }
}
