//! # Resource Error Types
//!
//! All errors that can occur while building or digging resources.

use thiserror::Error;

/// Errors that can occur in the resource system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// A resource was constructed with a hardness below zero.
    #[error("resource hardness should be non-negative, got {hardness} for {resource}")]
    NegativeHardness {
        /// The resource being constructed.
        resource: String,
        /// The rejected hardness.
        hardness: i64,
    },

    /// `dig` was called on a resource with no hardness left.
    #[error("cannot dig a fully-extracted resource: {0}")]
    AlreadyExtracted(String),

    /// `dig_block` was called while the resource sits in a terminal state.
    #[error("resource {resource} is in terminal state {state} and has no successor")]
    TerminalState {
        /// The resource that was dug.
        resource: String,
        /// Name of the terminal state.
        state: String,
    },

    /// A state name does not exist in the table.
    #[error("unknown resource state: {0}")]
    UnknownState(String),

    /// A resource name does not exist in the catalogue.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Two states or two resources share a name.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// The state transitions loop back on themselves.
    #[error("cycle detected in state table at state {0}")]
    CycleDetected(String),

    /// Invalid catalogue document.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;
