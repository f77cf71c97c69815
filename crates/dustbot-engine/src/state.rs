//! Mutable per-agent simulation state.

use dustbot_core::{Heading, Power, TilePos};

/// Everything the engine tracks about one agent between ticks.
///
/// Fields are public: the state record is plain data, and component-level
/// tests drive [`transition::apply`](crate::transition::apply) against
/// hand-built states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    /// Current tile. Always an interior, non-blocked tile.
    pub pos: TilePos,
    /// Current facing.
    pub facing: Heading,
    /// Power status. Starts `Unknown`; only `TurnOff` moves it to `Off`.
    pub power: Power,
    /// Whether the most recent `GoForward` was refused by a blocked tile.
    /// Cleared at the start of each tick before the action is applied.
    pub bumped: bool,
    /// Score earned or lost during the most recent tick.
    pub last_delta: i64,
    /// The tile the agent started on. The home sensor compares against this.
    pub home: TilePos,
}

impl AgentState {
    /// A freshly powered-on agent at its starting tile.
    pub fn new(start: TilePos, facing: Heading) -> Self {
        Self {
            pos: start,
            facing,
            power: Power::Unknown,
            bumped: false,
            last_delta: 0,
            home: start,
        }
    }

    /// Whether the agent is currently on its home tile.
    pub fn is_home(&self) -> bool {
        self.pos == self.home
    }
}
