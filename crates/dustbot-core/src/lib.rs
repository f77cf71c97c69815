//! Core types for the dustbot vacuum-world simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the dustbot workspace:
//! typed IDs, tile positions, the closed tile/heading/power/action
//! enumerations, and the per-tick percept record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod heading;
pub mod id;
pub mod percept;
pub mod pos;
pub mod power;
pub mod tile;

pub use action::Action;
pub use heading::Heading;
pub use id::{AgentId, TickId};
pub use percept::Percept;
pub use pos::TilePos;
pub use power::Power;
pub use tile::TileStatus;
