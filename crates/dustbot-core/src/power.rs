//! Agent power state.

use std::fmt;

/// The power state of an agent.
///
/// Agents start `Unknown` and reach `Off` through the `TurnOff`
/// action. `On` is part of the sensor vocabulary but is never set by
/// the reflex policy; it exists for policies that model an explicit
/// power-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Power {
    /// Powered down. A simulation halts once every agent is `Off`.
    Off,
    /// Actively running.
    On,
    /// Initial state before any action has executed.
    Unknown,
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Power::Off => "off",
            Power::On => "on",
            Power::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}
