//! # Map Error Types

use flatcraft_resources::ResourceError;
use thiserror::Error;

/// Errors that can occur while building or addressing a map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Height or width is zero.
    #[error("invalid map dimensions: {height}x{width} (both must be positive)")]
    InvalidDimensions {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },

    /// Coordinate outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) out of bounds for {height}x{width} map")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Map height.
        height: usize,
        /// Map width.
        width: usize,
    },

    /// Invalid generator or strata configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A resource could not be looked up or built.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;
