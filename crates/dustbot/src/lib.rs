//! Dustbot: a deterministic grid-world vacuum agent simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Dustbot sub-crates. For most users, adding `dustbot` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dustbot::prelude::*;
//!
//! // The classic room: 10x10 grid, two dirt piles, a five-tile wall,
//! // one reflex agent starting at (1, 1) facing north.
//! let mut sim = Simulation::new(SimConfig::classic()).unwrap();
//! let summary = sim.run().unwrap();
//!
//! // The agent collects both piles and shuts off at home before the cap.
//! assert!(summary.scores[0] >= 200);
//! assert!(summary.ticks.0 <= 50);
//! assert_eq!(sim.grid().dirty_count(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dustbot-core` | IDs, positions, headings, actions, percepts |
//! | [`grid`] | `dustbot-grid` | The tile grid, seeds, and rendering |
//! | [`agent`] | `dustbot-agent` | The `Policy` trait and the reflex policy |
//! | [`engine`] | `dustbot-engine` | The simulation loop, config, scoring, traces |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`dustbot-core`).
///
/// Contains [`types::TilePos`], [`types::Heading`], [`types::Action`],
/// [`types::Percept`], and the [`types::AgentId`] / [`types::TickId`]
/// newtypes.
pub use dustbot_core as types;

/// The tile grid (`dustbot-grid`).
///
/// [`grid::Grid`] is built from a [`grid::GridSpec`] seed, keeps its
/// border sealed, and renders itself as text.
pub use dustbot_grid as grid;

/// Agent policies (`dustbot-agent`).
///
/// The [`agent::Policy`] trait is the extension point for custom
/// decision procedures; [`agent::ReflexPolicy`] is the standard one.
pub use dustbot_agent as agent;

/// The simulation engine (`dustbot-engine`).
///
/// [`engine::Simulation`] drives the sense, decide, apply, settle loop
/// and reports per-tick [`engine::TickTrace`] records.
pub use dustbot_engine as engine;

/// Common imports for typical Dustbot usage.
///
/// ```rust
/// use dustbot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use dustbot_core::{
        Action, AgentId, Heading, Percept, Power, TickId, TilePos, TileStatus,
    };

    // Grid
    pub use dustbot_grid::{Grid, GridError, GridSpec};

    // Policies
    pub use dustbot_agent::{Policy, ReflexPolicy};

    // Engine
    pub use dustbot_engine::{
        AgentSpec, ConfigError, Phase, RunSummary, Scoreboard, SimConfig, Simulation, StepError,
        StepMetrics, TickTrace,
    };
}
