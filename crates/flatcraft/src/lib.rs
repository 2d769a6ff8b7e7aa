//! # FLATCRAFT
//!
//! World model core for a 2D block game.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  flatcraft            World, DigOutcome      │
//! │        │                                     │
//! │        ▼                                     │
//! │  flatcraft_procedural GameMap, MapGenerator  │
//! │        │                                     │
//! │        ▼                                     │
//! │  flatcraft_resources  Resource, StateTable   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `world`: Generated map plus the dig controller
//! - `error`: Unified error for world operations

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod world;

pub use flatcraft_procedural as procedural;
pub use flatcraft_resources as resources;

pub use error::{WorldError, WorldResult};
pub use world::{DigOutcome, World};
