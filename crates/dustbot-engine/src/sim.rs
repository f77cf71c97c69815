//! The synchronous simulation loop.
//!
//! [`Simulation`] owns the grid, the agent states, and the boxed
//! policies, and advances them one tick at a time. Each tick runs four
//! phases in a fixed order:
//!
//! 1. **Sense**: assemble a percept for every agent against the
//!    pre-tick world, so no agent sees another's same-tick effects.
//! 2. **Decide**: ask each policy for an action.
//! 3. **Apply**: run the transition function in agent index order.
//! 4. **Settle**: fold per-tick deltas into the scoreboard.
//!
//! There is no interleaving and no randomness anywhere in the loop, so
//! two simulations built from equal configs produce identical trace
//! sequences.

use std::time::Instant;

use dustbot_agent::{Policy, ReflexPolicy};
use dustbot_core::{Action, AgentId, Percept, Power, TickId};
use dustbot_grid::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::error::StepError;
use crate::metrics::StepMetrics;
use crate::score::Scoreboard;
use crate::sense;
use crate::state::AgentState;
use crate::trace::{AgentTrace, TickTrace};
use crate::transition;

// ── Phase ───────────────────────────────────────────────────────

/// Whether the simulation is still willing to execute ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticks may still execute.
    Running,
    /// The termination condition has been observed; `step()` refuses.
    Halted,
}

// ── RunSummary ──────────────────────────────────────────────────

/// Result of driving a simulation to termination with [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of ticks executed before the halt.
    pub ticks: TickId,
    /// Final score per agent, in agent index order.
    pub scores: Vec<i64>,
}

// ── Simulation ──────────────────────────────────────────────────

/// A vacuum-world simulation in lockstep (synchronous) execution.
///
/// Built from a [`SimConfig`] via [`new()`](Simulation::new), which
/// gives every agent the standard reflex policy, or via
/// [`with_policies()`](Simulation::with_policies) for custom ones.
///
/// All mutating methods take `&mut self`; the simulation is [`Send`]
/// but has no internal synchronization.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    states: Vec<AgentState>,
    policies: Vec<Box<dyn Policy>>,
    scoreboard: Scoreboard,
    tick: TickId,
    phase: Phase,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Build a simulation with one [`ReflexPolicy`] per agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails validation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let policies = config
            .agents
            .iter()
            .map(|_| Box::new(ReflexPolicy::new()) as Box<dyn Policy>)
            .collect();
        Self::with_policies(config, policies)
    }

    /// Build a simulation with caller-supplied policies, one per agent
    /// in agent index order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PolicyCountMismatch`] if the list length
    /// does not match the agent count, or any validation error from the
    /// config itself.
    pub fn with_policies(
        config: SimConfig,
        policies: Vec<Box<dyn Policy>>,
    ) -> Result<Self, ConfigError> {
        if policies.len() != config.agents.len() {
            return Err(ConfigError::PolicyCountMismatch {
                policies: policies.len(),
                agents: config.agents.len(),
            });
        }
        let grid = config.build_grid()?;
        let states = config
            .agents
            .iter()
            .map(|a| AgentState::new(a.start, a.facing))
            .collect::<Vec<_>>();
        let scoreboard = Scoreboard::new(states.len() as u32);
        Ok(Self {
            config,
            grid,
            states,
            policies,
            scoreboard,
            tick: TickId(0),
            phase: Phase::Running,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Whether the termination condition currently holds.
    ///
    /// True once the tick counter has reached the cap or every agent
    /// has powered off.
    fn halt_condition(&self) -> bool {
        self.tick.0 >= self.config.max_ticks
            || self.states.iter().all(|s| s.power == Power::Off)
    }

    /// Execute one tick.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Halted`] if the termination condition holds
    /// at the top of the tick; the simulation moves to [`Phase::Halted`]
    /// and every later call answers the same. Returns
    /// [`StepError::Fault`] if an agent's state has escaped the grid.
    pub fn step(&mut self) -> Result<TickTrace, StepError> {
        if self.phase == Phase::Halted || self.halt_condition() {
            self.phase = Phase::Halted;
            return Err(StepError::Halted);
        }

        let started = Instant::now();

        // Sense every agent against the pre-tick world.
        let mut percepts: Vec<Percept> = Vec::with_capacity(self.states.len());
        for state in &self.states {
            percepts.push(sense::percept(&self.grid, state)?);
        }
        let sensed = Instant::now();

        // Decide every action before any mutation.
        let mut actions: Vec<Action> = Vec::with_capacity(self.states.len());
        for (policy, percept) in self.policies.iter_mut().zip(&percepts) {
            actions.push(policy.decide(*percept));
        }
        let decided = Instant::now();

        transition::apply(&actions, &mut self.policies, &mut self.grid, &mut self.states)?;
        self.tick = TickId(self.tick.0 + 1);
        self.scoreboard.settle(&self.states);
        let applied = Instant::now();

        self.last_metrics = StepMetrics {
            sense_us: (sensed - started).as_micros() as u64,
            decide_us: (decided - sensed).as_micros() as u64,
            apply_us: (applied - decided).as_micros() as u64,
            total_us: (applied - started).as_micros() as u64,
        };

        let agents = self
            .states
            .iter()
            .enumerate()
            .map(|(i, state)| AgentTrace {
                id: AgentId(i as u32),
                percept: percepts[i],
                action: actions[i],
                delta: state.last_delta,
            })
            .collect();

        Ok(TickTrace {
            tick: self.tick,
            agents,
            halted: self.halt_condition(),
        })
    }

    /// Drive the simulation until it halts.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Fault`] if a tick faults. [`StepError::Halted`]
    /// is consumed internally; it marks normal completion.
    pub fn run(&mut self) -> Result<RunSummary, StepError> {
        loop {
            match self.step() {
                Ok(_) => {}
                Err(StepError::Halted) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(RunSummary {
            ticks: self.tick,
            scores: self.scoreboard.totals(),
        })
    }

    /// Return the simulation to tick 0.
    ///
    /// Rebuilds the grid from the config, restores every agent to its
    /// starting tile with `Unknown` power, zeroes the scoreboard, and
    /// resets each policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if the stored config fails
    /// validation, which cannot happen for a config that built this
    /// simulation.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.grid = self.config.build_grid()?;
        for (state, spec) in self.states.iter_mut().zip(&self.config.agents) {
            *state = AgentState::new(spec.start, spec.facing);
        }
        for policy in &mut self.policies {
            policy.reset();
        }
        self.scoreboard.clear();
        self.tick = TickId(0);
        self.phase = Phase::Running;
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// Current tick ID (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Whether the simulation is still running.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The tick cap from the config.
    pub fn max_ticks(&self) -> u64 {
        self.config.max_ticks
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.states.len()
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One agent's state, if the ID is in range.
    pub fn agent_state(&self, id: AgentId) -> Option<&AgentState> {
        self.states.get(id.index())
    }

    /// All agent states, in agent index order.
    pub fn states(&self) -> &[AgentState] {
        &self.states
    }

    /// The running scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Render the grid with agent markers, top row first.
    pub fn render(&self) -> String {
        let positions: Vec<_> = self.states.iter().map(|s| s.pos).collect();
        self.grid.render_with_agents(&positions)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("phase", &self.phase)
            .field("agents", &self.states.len())
            .field("dirty_tiles", &self.grid.dirty_count())
            .finish()
    }
}
