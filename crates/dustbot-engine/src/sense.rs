//! Percept assembly.
//!
//! Sensing is read-only and happens for every agent before any agent
//! acts, so all percepts within a tick describe the same world state.

use dustbot_core::Percept;
use dustbot_grid::{Grid, GridError};

use crate::state::AgentState;

/// Build the percept an agent receives at the top of a tick.
///
/// * `touch` reports whether the previous tick's `GoForward` bumped.
/// * `dirty` reports the status of the tile the agent stands on.
/// * `home` compares the agent's position against its starting tile.
///
/// # Errors
///
/// Returns [`GridError::OutOfBounds`] if the agent's position has left
/// the grid, which no legal transition can cause.
pub fn percept(grid: &Grid, state: &AgentState) -> Result<Percept, GridError> {
    Ok(Percept {
        touch: state.bumped,
        dirty: grid.is_dirty(state.pos)?,
        home: state.is_home(),
    })
}
