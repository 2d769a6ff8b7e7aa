//! # World Error Types

use flatcraft_procedural::MapError;
use flatcraft_resources::ResourceError;
use thiserror::Error;

/// Errors surfaced to the player-action handler or map-setup code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Map construction or addressing failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// A resource rejected a dig or could not be built.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
