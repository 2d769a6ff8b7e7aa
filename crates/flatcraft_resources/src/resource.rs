//! # Resources
//!
//! A resource is something on the map the player can interact with: dig it
//! out, or leave it in place.
//!
//! ## Dig Protocol
//!
//! ```text
//! dig() ──> hardness 3 → 2 → 1 → 0 ──> dig_block() ──> state.next()
//!                                            │
//!                            ┌───────────────┴───────────────┐
//!                            ▼                               ▼
//!                    transitional state               terminal state
//!                    (e.g. ore → rubble)           TerminalState error
//! ```
//!
//! `dig` and `dig_block` are deliberately decoupled: the caller hits until
//! hardness reaches zero, then commits the transition once. What to do with
//! the result (keep it on the map, collect it, drop it) is the caller's call.
//!
//! ## Identity
//!
//! Two resources are equal iff their names match. Hardness and state are
//! wear, not identity, so a resource works as a `HashMap` key.

use std::hash::{Hash, Hasher};

use crate::error::{ResourceError, ResourceResult};
use crate::state::{ResourceState, Sprite};
use crate::tool::ToolType;

/// A single extractable entity.
#[derive(Clone, Debug)]
pub struct Resource {
    /// Unique name identifying the resource type.
    name: String,
    /// Tool needed to extract the resource.
    tool_type: ToolType,
    /// Remaining hits before the resource is extracted.
    hardness: u32,
    /// Current state.
    state: ResourceState,
}

impl Resource {
    /// Creates a new resource.
    ///
    /// # Errors
    ///
    /// Returns `NegativeHardness` if `hardness` is below zero, and
    /// `InvalidConfig` if it does not fit in a `u32`.
    pub fn new(
        name: impl Into<String>,
        tool_type: ToolType,
        hardness: i64,
        state: ResourceState,
    ) -> ResourceResult<Self> {
        let name = name.into();
        if hardness < 0 {
            return Err(ResourceError::NegativeHardness {
                resource: name,
                hardness,
            });
        }
        let hardness = u32::try_from(hardness).map_err(|_| {
            ResourceError::InvalidConfig(format!("hardness {hardness} too large for {name}"))
        })?;

        Ok(Self {
            name,
            tool_type,
            hardness,
            state,
        })
    }

    /// Returns the unique name of this resource type.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool needed to extract this resource.
    #[inline]
    #[must_use]
    pub const fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    /// Returns the remaining hardness.
    #[inline]
    #[must_use]
    pub const fn hardness(&self) -> u32 {
        self.hardness
    }

    /// Returns the sprite of the current state.
    #[must_use]
    pub fn sprite(&self) -> &Sprite {
        self.state.sprite()
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &ResourceState {
        &self.state
    }

    /// Returns true once hardness has reached zero.
    #[inline]
    #[must_use]
    pub const fn is_extracted(&self) -> bool {
        self.hardness == 0
    }

    /// Returns true if the current state marks the resource as removed.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.state.is_removed()
    }

    /// Applies one hit, reducing hardness by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExtracted` if hardness is already zero.
    pub fn dig(&mut self) -> ResourceResult<()> {
        if self.hardness == 0 {
            return Err(ResourceError::AlreadyExtracted(self.name.clone()));
        }
        self.hardness -= 1;
        tracing::trace!(resource = %self.name, remaining = self.hardness, "dig");
        Ok(())
    }

    /// Commits the state transition and returns the resulting resource.
    ///
    /// # Errors
    ///
    /// Returns `TerminalState` if the current state has no successor. The
    /// resource is left unchanged.
    pub fn dig_block(&mut self) -> ResourceResult<&mut Self> {
        let next = self.state.next().ok_or_else(|| ResourceError::TerminalState {
            resource: self.name.clone(),
            state: self.state.name().to_string(),
        })?;

        tracing::debug!(
            resource = %self.name,
            from = self.state.name(),
            to = next.name(),
            "state transition"
        );
        self.state = next;
        Ok(self)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Resource {}

impl Hash for Resource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
