//! Per-tick trace records.
//!
//! Every successful `step()` returns a [`TickTrace`] describing what
//! each agent perceived, decided, and earned. Traces are the engine's
//! observability surface; two runs of the same config produce identical
//! trace sequences.

use dustbot_core::{Action, AgentId, Percept, TickId};

/// One agent's slice of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTrace {
    /// The agent this record describes.
    pub id: AgentId,
    /// The percept the agent received at the top of the tick.
    pub percept: Percept,
    /// The action its policy selected.
    pub action: Action,
    /// Score earned or lost this tick.
    pub delta: i64,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTrace {
    /// The tick this trace describes (1 for the first tick).
    pub tick: TickId,
    /// Per-agent records, in agent index order.
    pub agents: Vec<AgentTrace>,
    /// Whether the termination condition holds after this tick.
    pub halted: bool,
}

impl std::fmt::Display for TickTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tick {}:", self.tick)?;
        for agent in &self.agents {
            write!(
                f,
                " [agent {} {} -> {} ({:+})]",
                agent.id, agent.percept, agent.action, agent.delta
            )?;
        }
        if self.halted {
            write!(f, " halted")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_agents_in_order() {
        let trace = TickTrace {
            tick: TickId(3),
            agents: vec![
                AgentTrace {
                    id: AgentId(0),
                    percept: Percept::new(false, true, false),
                    action: Action::SuckUpDirt,
                    delta: 100,
                },
                AgentTrace {
                    id: AgentId(1),
                    percept: Percept::new(true, false, false),
                    action: Action::TurnRight,
                    delta: 0,
                },
            ],
            halted: false,
        };
        let line = trace.to_string();
        assert!(line.starts_with("tick 3:"));
        assert!(line.contains("suck-up-dirt"));
        assert!(line.contains("(+100)"));
        let a0 = line.find("agent 0").unwrap();
        let a1 = line.find("agent 1").unwrap();
        assert!(a0 < a1);
    }

    #[test]
    fn display_marks_halted_ticks() {
        let trace = TickTrace {
            tick: TickId(50),
            agents: vec![],
            halted: true,
        };
        assert!(trace.to_string().ends_with("halted"));
    }
}
