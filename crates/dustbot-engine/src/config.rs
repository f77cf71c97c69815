//! Simulation configuration and validation.

use dustbot_core::{Heading, TilePos};
use dustbot_grid::{Grid, GridError, GridSpec};

// ── AgentSpec ───────────────────────────────────────────────────

/// Starting placement for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSpec {
    /// Starting tile. Must be an open interior tile. Doubles as the
    /// agent's home tile for the home sensor and shutdown penalty.
    pub start: TilePos,
    /// Initial facing.
    pub facing: Heading,
}

impl AgentSpec {
    /// Spec for an agent starting at `start` facing `facing`.
    pub fn new(start: TilePos, facing: Heading) -> Self {
        Self { start, facing }
    }
}

// ── SimConfig ───────────────────────────────────────────────────

/// Complete description of a simulation run.
///
/// Validated as a whole by [`validate()`](SimConfig::validate) before
/// any stepping happens; a `Simulation` can only be built from a
/// config that passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid dimensions and seed tiles.
    pub grid: GridSpec,
    /// One entry per agent, in agent index order.
    pub agents: Vec<AgentSpec>,
    /// Tick cap. The run halts once the tick counter reaches this.
    pub max_ticks: u64,
}

impl SimConfig {
    /// The classic single-agent room.
    ///
    /// A 10x10 grid with dirt at `(1, 2)` and `(4, 3)`, a wall segment
    /// at `(5, 4)` through `(5, 8)`, and one agent starting at `(1, 1)`
    /// facing north, capped at 50 ticks.
    pub fn classic() -> Self {
        Self {
            grid: GridSpec {
                width: 10,
                height: 10,
                dirty: vec![TilePos::new(1, 2), TilePos::new(4, 3)],
                blocked: (4..=8).map(|y| TilePos::new(5, y)).collect(),
            },
            agents: vec![AgentSpec::new(TilePos::new(1, 1), Heading::North)],
            max_ticks: 50,
        }
    }

    /// Validate the configuration without building a simulation.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`] for everything this checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_grid().map(|_| ())
    }

    /// Build and fully validate the starting grid, then check agent
    /// placements against it.
    pub(crate) fn build_grid(&self) -> Result<Grid, ConfigError> {
        if self.agents.is_empty() {
            return Err(ConfigError::NoAgents);
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroMaxTicks);
        }
        let grid = Grid::new(&self.grid)?;
        for (index, agent) in self.agents.iter().enumerate() {
            if grid.is_blocked(agent.start)? {
                return Err(ConfigError::StartBlocked {
                    index,
                    pos: agent.start,
                });
            }
            if self.agents[..index].iter().any(|a| a.start == agent.start) {
                return Err(ConfigError::DuplicateStart { pos: agent.start });
            }
        }
        Ok(grid)
    }
}

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid seed itself was rejected.
    Grid(GridError),
    /// The agent list is empty.
    NoAgents,
    /// `max_ticks` is zero; the run could never execute a tick.
    ZeroMaxTicks,
    /// An agent's starting tile is blocked or outside the interior.
    StartBlocked {
        /// Index of the offending agent in the config's agent list.
        index: usize,
        /// The starting tile that was rejected.
        pos: TilePos,
    },
    /// Two agents share a starting tile.
    DuplicateStart {
        /// The shared starting tile.
        pos: TilePos,
    },
    /// A policy list of the wrong length was supplied.
    PolicyCountMismatch {
        /// Number of policies supplied.
        policies: usize,
        /// Number of agents in the config.
        agents: usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Grid(e) => write!(f, "invalid grid: {e}"),
            ConfigError::NoAgents => write!(f, "config declares no agents"),
            ConfigError::ZeroMaxTicks => write!(f, "max_ticks must be at least 1"),
            ConfigError::StartBlocked { index, pos } => {
                write!(f, "agent {index} starts on blocked tile {pos}")
            }
            ConfigError::DuplicateStart { pos } => {
                write!(f, "two agents start on the same tile {pos}")
            }
            ConfigError::PolicyCountMismatch { policies, agents } => {
                write!(f, "{policies} policies supplied for {agents} agents")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Grid(e)
    }
}
