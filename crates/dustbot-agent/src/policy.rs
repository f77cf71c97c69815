//! The [`Policy`] trait.

use dustbot_core::{Action, Percept};

/// A per-agent decision procedure.
///
/// # Contract
///
/// - `decide()` MUST be deterministic: the same percept sequence
///   produces the same action sequence.
/// - Policies are read-only with respect to the environment; the only
///   state they may carry is their own memory (e.g. the reflex
///   policy's first-activation flag).
/// - `note_executed()` is called by the transition function once per
///   tick for every agent, before the agent's action is applied. Any
///   "has ever acted" memory must be cleared here, not only in
///   `decide()`.
///
/// # Object safety
///
/// The trait is object-safe; the engine stores policies as
/// `Vec<Box<dyn Policy>>`, one per agent in index order.
pub trait Policy: Send + 'static {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Select an action for the given percept.
    fn decide(&mut self, percept: Percept) -> Action;

    /// Record that a decision of this agent has been executed.
    ///
    /// Default: no-op, for policies without activation memory.
    fn note_executed(&mut self) {}

    /// Return the policy to its freshly constructed state.
    ///
    /// Called by `Simulation::reset()`. Default: no-op.
    fn reset(&mut self) {}
}
