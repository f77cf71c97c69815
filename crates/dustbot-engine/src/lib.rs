//! Simulation engine for the dustbot vacuum world.
//!
//! Provides the top-level [`Simulation`] that owns the grid, the agent
//! states, and the boxed policies, and drives the synchronous tick loop:
//! sense every agent, decide every action, apply every action in agent
//! index order, then settle the scoreboard.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod score;
pub mod sense;
pub mod sim;
pub mod state;
pub mod trace;
pub mod transition;

pub use config::{AgentSpec, ConfigError, SimConfig};
pub use error::StepError;
pub use metrics::StepMetrics;
pub use score::Scoreboard;
pub use sim::{Phase, RunSummary, Simulation};
pub use state::AgentState;
pub use trace::{AgentTrace, TickTrace};
