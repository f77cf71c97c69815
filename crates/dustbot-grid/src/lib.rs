//! The bounded tile map for dustbot simulations.
//!
//! A [`Grid`] is a fixed-size rectangle of [`TileStatus`] values with
//! a sealed blocked border. It is constructed once from a
//! [`GridSpec`] and afterwards mutated only through the clean effect
//! ([`Grid::clean`]). All accessors are bounds-checked and return
//! [`GridError`] for off-grid coordinates; the engine treats such an
//! error as a broken invariant, never as something to clamp.
//!
//! [`TileStatus`]: dustbot_core::TileStatus

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::{Grid, GridSpec};
