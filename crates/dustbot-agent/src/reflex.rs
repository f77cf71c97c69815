//! The reference reflex policy.

use crate::policy::Policy;
use dustbot_core::{Action, Percept};

/// Simple reflex vacuum policy.
///
/// Priority order: power down at home (unless this is the very first
/// decision), recover from bumps by turning right, suck up dirt,
/// otherwise drive forward.
///
/// The first-activation guard is the one subtlety: an agent whose
/// very first decision happens at home must drive off rather than
/// shut down, so the home rule only fires once the flag has been
/// cleared by an earlier decision or executed action.
#[derive(Debug)]
pub struct ReflexPolicy {
    first_activation: bool,
}

impl ReflexPolicy {
    /// A fresh policy that has not yet taken a decision.
    pub fn new() -> Self {
        Self {
            first_activation: true,
        }
    }

    /// Whether no decision of this agent has executed yet.
    pub fn is_first_activation(&self) -> bool {
        self.first_activation
    }
}

impl Default for ReflexPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for ReflexPolicy {
    fn name(&self) -> &str {
        "reflex"
    }

    fn decide(&mut self, percept: Percept) -> Action {
        if percept.home && !self.first_activation {
            return Action::TurnOff;
        }
        self.first_activation = false;
        if percept.touch {
            Action::TurnRight
        } else if percept.dirty {
            Action::SuckUpDirt
        } else {
            Action::GoForward
        }
    }

    fn note_executed(&mut self) {
        self.first_activation = false;
    }

    fn reset(&mut self) {
        self.first_activation = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percept(touch: bool, dirty: bool, home: bool) -> Percept {
        Percept::new(touch, dirty, home)
    }

    #[test]
    fn first_decision_at_home_is_never_turn_off() {
        let mut p = ReflexPolicy::new();
        assert_eq!(p.decide(percept(false, false, true)), Action::GoForward);
    }

    #[test]
    fn second_decision_at_home_turns_off() {
        let mut p = ReflexPolicy::new();
        p.decide(percept(false, false, true));
        assert_eq!(p.decide(percept(false, false, true)), Action::TurnOff);
    }

    #[test]
    fn home_rule_outranks_dirt_and_touch() {
        let mut p = ReflexPolicy::new();
        p.note_executed();
        assert_eq!(p.decide(percept(true, true, true)), Action::TurnOff);
    }

    #[test]
    fn touch_outranks_dirt() {
        let mut p = ReflexPolicy::new();
        assert_eq!(p.decide(percept(true, true, false)), Action::TurnRight);
    }

    #[test]
    fn dirt_outranks_forward() {
        let mut p = ReflexPolicy::new();
        assert_eq!(p.decide(percept(false, true, false)), Action::SuckUpDirt);
    }

    #[test]
    fn clear_percept_drives_forward() {
        let mut p = ReflexPolicy::new();
        assert_eq!(p.decide(percept(false, false, false)), Action::GoForward);
    }

    #[test]
    fn note_executed_clears_first_activation() {
        let mut p = ReflexPolicy::new();
        assert!(p.is_first_activation());
        p.note_executed();
        assert!(!p.is_first_activation());
        // Now even a decision-free agent that finds itself at home
        // (e.g. after an executed NoOp) powers down.
        assert_eq!(p.decide(percept(false, false, true)), Action::TurnOff);
    }

    #[test]
    fn reset_restores_first_activation() {
        let mut p = ReflexPolicy::new();
        p.decide(percept(false, false, true));
        p.reset();
        assert!(p.is_first_activation());
        assert_eq!(p.decide(percept(false, false, true)), Action::GoForward);
    }

    #[test]
    fn first_decision_away_from_home_also_clears_flag() {
        let mut p = ReflexPolicy::new();
        p.decide(percept(false, false, false));
        assert!(!p.is_first_activation());
    }
}
