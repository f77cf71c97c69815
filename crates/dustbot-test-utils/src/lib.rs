//! Test utilities for dustbot development.
//!
//! Provides scripted [`Policy`] implementations for driving the
//! transition function from tests, plus grid fixtures shared across
//! crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{classic_room, classic_room_spec, pocket_room_spec, sealed_room_spec};

use std::sync::{Arc, Mutex};

use dustbot_agent::Policy;
use dustbot_core::{Action, Percept};

/// Shared percept log, so tests keep a handle after the policy is
/// boxed into a simulation.
pub type PerceptLog = Arc<Mutex<Vec<Percept>>>;

/// Creates a new empty percept log.
pub fn new_percept_log() -> PerceptLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Policy that plays a fixed action script, then `NoOp` forever.
///
/// The percept is ignored; use this to force specific transition
/// paths regardless of what the agent senses.
pub struct ScriptedPolicy {
    script: Vec<Action>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(script: Vec<Action>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Policy for ScriptedPolicy {
    fn name(&self) -> &str {
        "scripted"
    }

    fn decide(&mut self, _percept: Percept) -> Action {
        let action = self.script.get(self.cursor).copied().unwrap_or(Action::NoOp);
        self.cursor += 1;
        action
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Policy that always answers `NoOp`.
///
/// Useful for pinning an agent in place while another agent under
/// test moves around it.
#[derive(Default)]
pub struct NoOpPolicy;

impl NoOpPolicy {
    pub fn new() -> Self {
        NoOpPolicy
    }
}

impl Policy for NoOpPolicy {
    fn name(&self) -> &str {
        "no-op"
    }

    fn decide(&mut self, _percept: Percept) -> Action {
        Action::NoOp
    }
}

/// Policy that answers a fixed action and appends every percept it
/// receives to a shared [`PerceptLog`].
///
/// Lets tests assert on the exact percept sequence an agent received
/// even after the policy has been boxed into a simulation.
pub struct RecordingPolicy {
    action: Action,
    log: PerceptLog,
}

impl RecordingPolicy {
    pub fn new(action: Action, log: PerceptLog) -> Self {
        Self { action, log }
    }
}

impl Policy for RecordingPolicy {
    fn name(&self) -> &str {
        "recording"
    }

    fn decide(&mut self, percept: Percept) -> Action {
        if let Ok(mut log) = self.log.lock() {
            log.push(percept);
        }
        self.action
    }
}
