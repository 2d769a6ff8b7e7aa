//! # FLATCRAFT Resources
//!
//! Everything the player can dig out of the map.
//!
//! ## Design Principles
//!
//! 1. **Identity by name** - wear (hardness, state) never affects equality
//! 2. **Explicit failure** - over-digging and digging past a terminal state
//!    are errors, never silent no-ops
//! 3. **Validated tables** - state chains are checked for cycles at load time
//! 4. **External configuration** - resource definitions live in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use flatcraft_resources::{ResourceCatalogue, ToolType};
//!
//! let catalogue = ResourceCatalogue::load("data/catalogue.toml".as_ref())?;
//! let mut stone = catalogue.create("stone")?;
//!
//! while !stone.is_extracted() {
//!     stone.dig()?;
//! }
//! let rubble = stone.dig_block()?;
//! assert_eq!(rubble.name(), "stone");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalogue;
pub mod error;
pub mod resource;
pub mod state;
pub mod tool;

pub use catalogue::ResourceCatalogue;
pub use error::{ResourceError, ResourceResult};
pub use resource::Resource;
pub use state::{ResourceState, Sprite, StateDef, StateId, StateTable, StateTableBuilder, Transition};
pub use tool::ToolType;
