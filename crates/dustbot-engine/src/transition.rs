//! The world transition function.
//!
//! Applies one already-decided action per agent, strictly in ascending
//! agent index order. Percepts for every agent are assembled before this
//! runs, so an earlier agent's effects (cleaning a tile, say) are visible
//! to later agents' *actions* within the tick but never to their percepts.

use dustbot_agent::Policy;
use dustbot_core::{Action, Power};
use dustbot_grid::Grid;

use crate::error::StepError;
use crate::state::AgentState;

/// Score awarded when an agent performs `SuckUpDirt`.
///
/// Awarded unconditionally, dirt or no dirt. A policy that sucks on a
/// clean tile still collects the award; the environment does not
/// second-guess the action.
pub const CLEAN_AWARD: i64 = 100;

/// Score forfeited when an agent turns itself off away from home.
pub const AWAY_SHUTDOWN_PENALTY: i64 = 1000;

/// Apply one tick's worth of actions.
///
/// For each agent, in index order: clear the bump flag and per-tick
/// delta, notify the policy that a decision has executed, then apply
/// the action. Agents that are already `Off` still go through the same
/// path; their decided action applies like any other.
///
/// `actions`, `policies`, and `states` are parallel slices indexed by
/// agent; the caller (the simulation loop) guarantees equal lengths.
///
/// # Errors
///
/// Returns [`StepError::Fault`] if an action touches a tile outside the
/// grid. The sealed border makes this unreachable through the public
/// API; a fault means agent state was corrupted out-of-band.
pub fn apply(
    actions: &[Action],
    policies: &mut [Box<dyn Policy>],
    grid: &mut Grid,
    states: &mut [AgentState],
) -> Result<(), StepError> {
    debug_assert_eq!(actions.len(), states.len());
    debug_assert_eq!(policies.len(), states.len());

    for i in 0..states.len() {
        let state = &mut states[i];
        state.bumped = false;
        state.last_delta = 0;
        policies[i].note_executed();

        match actions[i] {
            Action::NoOp => {}
            Action::GoForward => {
                let target = state.pos.step(state.facing);
                if grid.is_blocked(target)? {
                    state.bumped = true;
                } else {
                    state.pos = target;
                }
            }
            Action::TurnRight => {
                state.facing = state.facing.turned_right();
            }
            Action::TurnLeft => {
                state.facing = state.facing.turned_left();
            }
            Action::SuckUpDirt => {
                grid.clean(state.pos)?;
                state.last_delta += CLEAN_AWARD;
            }
            Action::TurnOff => {
                state.power = Power::Off;
                if !state.is_home() {
                    state.last_delta -= AWAY_SHUTDOWN_PENALTY;
                }
            }
        }
    }
    Ok(())
}
