//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an agent within a simulation.
///
/// Agents are registered at simulation creation and assigned
/// sequential IDs in declaration order. `AgentId(n)` corresponds to
/// the n-th agent spec in the configuration. IDs are stable for the
/// lifetime of the simulation and double as the processing order
/// during the transition phase (ascending).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Zero-based position of this agent in the configuration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented once at the end of each transition phase. `TickId(0)`
/// is the pre-simulation state; the first completed tick is
/// `TickId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_id_index_round_trips() {
        assert_eq!(AgentId(0).index(), 0);
        assert_eq!(AgentId::from(7u32).index(), 7);
    }

    #[test]
    fn tick_id_orders_monotonically() {
        assert!(TickId(0) < TickId(1));
        assert_eq!(TickId::from(50u64), TickId(50));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(AgentId(3).to_string(), "3");
        assert_eq!(TickId(42).to_string(), "42");
    }
}
