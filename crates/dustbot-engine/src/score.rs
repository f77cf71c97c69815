//! Cumulative per-agent scoring.

use dustbot_core::AgentId;
use indexmap::IndexMap;

use crate::state::AgentState;

/// Running score totals, one per agent, in agent index order.
///
/// Backed by an [`IndexMap`] so iteration order is insertion order,
/// which the engine guarantees matches agent index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    totals: IndexMap<AgentId, i64>,
}

impl Scoreboard {
    /// A scoreboard with `agent_count` agents, all at zero.
    pub fn new(agent_count: u32) -> Self {
        let mut totals = IndexMap::with_capacity(agent_count as usize);
        for i in 0..agent_count {
            totals.insert(AgentId(i), 0);
        }
        Self { totals }
    }

    /// Fold each agent's per-tick delta into its running total.
    ///
    /// Called exactly once per tick, after the transition function runs.
    pub fn settle(&mut self, states: &[AgentState]) {
        debug_assert_eq!(states.len(), self.totals.len());
        for (i, state) in states.iter().enumerate() {
            if let Some((_, total)) = self.totals.get_index_mut(i) {
                *total += state.last_delta;
            }
        }
    }

    /// The running total for one agent, if it exists.
    pub fn total(&self, id: AgentId) -> Option<i64> {
        self.totals.get(&id).copied()
    }

    /// All totals in agent index order.
    pub fn totals(&self) -> Vec<i64> {
        self.totals.values().copied().collect()
    }

    /// Iterate `(id, total)` pairs in agent index order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, i64)> + '_ {
        self.totals.iter().map(|(&id, &total)| (id, total))
    }

    /// Reset every total to zero, keeping the agent set.
    pub fn clear(&mut self) {
        for total in self.totals.values_mut() {
            *total = 0;
        }
    }
}
