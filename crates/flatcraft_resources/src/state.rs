//! # Resource States
//!
//! A resource's look and fate change as it is dug. Each state knows two
//! things: the sprite to draw and what comes after it.
//!
//! ## Transition Table
//!
//! States are stored in a [`StateTable`] keyed by [`StateId`]:
//!
//! ```text
//! id │ name     │ sprite       │ transition
//! ───┼──────────┼──────────────┼─────────────────
//!  0 │ ore      │ stone        │ Next(1)
//!  1 │ rubble   │ cobblestone  │ Stable
//!  2 │ block    │ block        │ Next(3)
//!  3 │ removed  │ air          │ Removed
//! ```
//!
//! ## Guarantees
//!
//! 1. **Closed**: every `Next` points at a state of the same table
//! 2. **Acyclic**: validated with Kahn's algorithm when the table is built,
//!    so any walk ends within `len()` transitions
//! 3. **Immutable**: tables are shared behind an `Arc` and never change

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};

/// Opaque identity token resolvable to a visual asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sprite(String);

impl Sprite {
    /// Creates a sprite token from its asset key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the asset key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of a state inside its [`StateTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u16);

impl StateId {
    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What happens when a resource in this state is fully dug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Move on to the given state.
    Next(StateId),
    /// Terminal: the resource stays as it is.
    Stable,
    /// Terminal: the resource is gone and its owner must drop it.
    Removed,
}

impl Transition {
    /// Returns true for both terminal kinds.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Next(_))
    }
}

/// A single row of the transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateDef {
    /// Unique name within the table.
    pub name: String,
    /// Sprite shown while a resource is in this state.
    pub sprite: Sprite,
    /// Successor rule.
    pub transition: Transition,
}

/// Validated, acyclic transition table.
#[derive(Debug, PartialEq, Eq)]
pub struct StateTable {
    states: Vec<StateDef>,
    by_name: HashMap<String, StateId>,
}

impl StateTable {
    /// Name of the standard ore state.
    pub const ORE: &'static str = "ore";
    /// Name of the standard rubble state (successor of `ore`).
    pub const RUBBLE: &'static str = "rubble";
    /// Name of the standard plain block state.
    pub const BLOCK: &'static str = "block";
    /// Name of the standard removal marker.
    pub const REMOVED: &'static str = "removed";

    /// Returns a small illustrative table: `ore → rubble` and `block → removed`.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        let states = vec![
            StateDef {
                name: Self::ORE.to_string(),
                sprite: Sprite::new("stone"),
                transition: Transition::Next(StateId(1)),
            },
            StateDef {
                name: Self::RUBBLE.to_string(),
                sprite: Sprite::new("cobblestone"),
                transition: Transition::Stable,
            },
            StateDef {
                name: Self::BLOCK.to_string(),
                sprite: Sprite::new("block"),
                transition: Transition::Next(StateId(3)),
            },
            StateDef {
                name: Self::REMOVED.to_string(),
                sprite: Sprite::new("air"),
                transition: Transition::Removed,
            },
        ];
        Arc::new(Self::indexed(states))
    }

    fn indexed(states: Vec<StateDef>) -> Self {
        let by_name = states
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), StateId(i as u16)))
            .collect();
        Self { states, by_name }
    }

    /// Returns the number of states.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the table has no states.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Looks up a state id by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<StateId> {
        self.by_name.get(name).copied()
    }

    /// Returns the definition for an id.
    #[must_use]
    pub fn def(&self, id: StateId) -> Option<&StateDef> {
        self.states.get(id.index())
    }

    /// Iterates over all definitions in id order.
    pub fn defs(&self) -> impl Iterator<Item = (StateId, &StateDef)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, def)| (StateId(i as u16), def))
    }

    /// Returns a cursor positioned on the named state.
    ///
    /// # Errors
    ///
    /// Returns `UnknownState` if no state has that name.
    pub fn state(self: &Arc<Self>, name: &str) -> ResourceResult<ResourceState> {
        let id = self
            .id_of(name)
            .ok_or_else(|| ResourceError::UnknownState(name.to_string()))?;
        Ok(ResourceState {
            table: Arc::clone(self),
            id,
        })
    }
}

/// Successor as written by the builder, before names are resolved.
#[derive(Clone, Debug)]
enum PendingTransition {
    Next(String),
    Stable,
    Removed,
}

/// Builds a [`StateTable`], resolving names and rejecting cycles.
///
/// ```rust,ignore
/// let table = StateTableBuilder::new()
///     .transitional("log", "oak-log", "planks")
///     .stable("planks", "oak-planks")
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct StateTableBuilder {
    pending: Vec<(String, Sprite, PendingTransition)>,
}

impl StateTableBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state that moves to `next` when dug.
    #[must_use]
    pub fn transitional(
        mut self,
        name: impl Into<String>,
        sprite: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.pending.push((
            name.into(),
            Sprite::new(sprite),
            PendingTransition::Next(next.into()),
        ));
        self
    }

    /// Adds a terminal state that keeps the resource in place.
    #[must_use]
    pub fn stable(mut self, name: impl Into<String>, sprite: impl Into<String>) -> Self {
        self.pending
            .push((name.into(), Sprite::new(sprite), PendingTransition::Stable));
        self
    }

    /// Adds a terminal removal marker.
    #[must_use]
    pub fn removed(mut self, name: impl Into<String>, sprite: impl Into<String>) -> Self {
        self.pending
            .push((name.into(), Sprite::new(sprite), PendingTransition::Removed));
        self
    }

    /// Validates and freezes the table.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if two states share a name
    /// - `UnknownState` if a successor is not defined
    /// - `CycleDetected` if transitions loop
    /// - `InvalidConfig` if the table has more states than ids can address
    pub fn build(self) -> ResourceResult<Arc<StateTable>> {
        if self.pending.len() > usize::from(u16::MAX) {
            return Err(ResourceError::InvalidConfig(format!(
                "state table too large: {} states",
                self.pending.len()
            )));
        }

        let mut by_name: HashMap<String, StateId> = HashMap::with_capacity(self.pending.len());
        for (i, (name, _, _)) in self.pending.iter().enumerate() {
            if by_name.insert(name.clone(), StateId(i as u16)).is_some() {
                return Err(ResourceError::DuplicateName(name.clone()));
            }
        }

        let mut states = Vec::with_capacity(self.pending.len());
        for (name, sprite, pending) in self.pending {
            let transition = match pending {
                PendingTransition::Next(next) => Transition::Next(
                    *by_name
                        .get(&next)
                        .ok_or(ResourceError::UnknownState(next))?,
                ),
                PendingTransition::Stable => Transition::Stable,
                PendingTransition::Removed => Transition::Removed,
            };
            states.push(StateDef {
                name,
                sprite,
                transition,
            });
        }

        validate_acyclic(&states)?;
        Ok(Arc::new(StateTable { states, by_name }))
    }
}

/// Kahn's algorithm over the successor edges.
///
/// Every state has at most one outgoing edge, so if the topological sort
/// consumes every node there is no loop.
fn validate_acyclic(states: &[StateDef]) -> ResourceResult<()> {
    let mut in_degree = vec![0usize; states.len()];
    for def in states {
        if let Transition::Next(next) = def.transition {
            in_degree[next.index()] += 1;
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &deg)| deg == 0)
        .map(|(i, _)| i)
        .collect();

    let mut sorted_count = 0;
    while let Some(i) = queue.pop_front() {
        sorted_count += 1;
        if let Transition::Next(next) = states[i].transition {
            let deg = &mut in_degree[next.index()];
            *deg -= 1;
            if *deg == 0 {
                queue.push_back(next.index());
            }
        }
    }

    if sorted_count == states.len() {
        return Ok(());
    }

    let looping = in_degree
        .iter()
        .position(|&deg| deg > 0)
        .map_or_else(String::new, |i| states[i].name.clone());
    Err(ResourceError::CycleDetected(looping))
}

/// A resource's current position in its state table.
#[derive(Clone)]
pub struct ResourceState {
    table: Arc<StateTable>,
    id: StateId,
}

impl ResourceState {
    fn def(&self) -> &StateDef {
        // Ids are only ever minted by the table that owns them.
        &self.table.states[self.id.index()]
    }

    /// Returns the state id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns the state name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def().name
    }

    /// Returns the sprite for this state.
    #[must_use]
    pub fn sprite(&self) -> &Sprite {
        &self.def().sprite
    }

    /// Returns the successor rule.
    #[must_use]
    pub fn transition(&self) -> Transition {
        self.def().transition
    }

    /// Returns true if this state has no successor.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.transition().is_terminal()
    }

    /// Returns true if this is a removal marker.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.transition() == Transition::Removed
    }

    /// Returns the successor, or `None` for terminal states.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        match self.transition() {
            Transition::Next(id) => Some(Self {
                table: Arc::clone(&self.table),
                id,
            }),
            Transition::Stable | Transition::Removed => None,
        }
    }

    /// Returns the table this state belongs to.
    #[must_use]
    pub fn table(&self) -> &Arc<StateTable> {
        &self.table
    }
}

impl PartialEq for ResourceState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.table, &other.table)
    }
}

impl Eq for ResourceState {}

impl fmt::Debug for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceState")
            .field("name", &self.name())
            .field("transition", &self.transition())
            .finish()
    }
}
