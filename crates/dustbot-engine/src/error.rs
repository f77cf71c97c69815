//! Engine-level step errors.

use dustbot_grid::GridError;

/// Errors surfaced by [`Simulation::step`](crate::sim::Simulation::step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A world invariant was broken mid-tick (tile access out of bounds).
    ///
    /// The sealed border makes this unreachable from any well-formed
    /// configuration; it surfaces only if state has been corrupted by
    /// direct field manipulation.
    Fault(GridError),
    /// The simulation has already reached its termination condition.
    ///
    /// Returned by every `step()` after the tick cap is hit or every
    /// agent has powered off. Not a failure; `run()` uses it to stop.
    Halted,
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::Fault(e) => write!(f, "world invariant broken: {e}"),
            StepError::Halted => write!(f, "simulation has halted"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StepError::Fault(e) => Some(e),
            StepError::Halted => None,
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        StepError::Fault(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dustbot_core::TilePos;

    #[test]
    fn fault_display_includes_grid_error() {
        let err = StepError::from(GridError::OutOfBounds {
            pos: TilePos::new(12, 3),
            width: 10,
            height: 10,
        });
        let msg = err.to_string();
        assert!(msg.contains("world invariant broken"));
        assert!(msg.contains("(12, 3)"));
    }

    #[test]
    fn fault_exposes_source() {
        use std::error::Error;
        let err = StepError::Fault(GridError::TooSmall {
            width: 2,
            height: 2,
        });
        assert!(err.source().is_some());
        assert!(StepError::Halted.source().is_none());
    }
}
