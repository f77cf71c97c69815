//! The per-tick sensor reading.

use std::fmt;

/// What an agent senses at the top of a tick.
///
/// Computed fresh every tick from the grid and the agent's state;
/// never stored across ticks. All three sensors are boolean;
/// sensing is exact, not probabilistic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Percept {
    /// The previous tick's forward move hit a blocked tile.
    pub touch: bool,
    /// The tile under the agent is dirty.
    pub dirty: bool,
    /// The agent is on its home tile.
    pub home: bool,
}

impl Percept {
    /// Construct a percept from raw sensor values.
    pub fn new(touch: bool, dirty: bool, home: bool) -> Self {
        Self { touch, dirty, home }
    }
}

impl fmt::Display for Percept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "touch={} dirty={} home={}",
            self.touch, self.dirty, self.home
        )
    }
}
