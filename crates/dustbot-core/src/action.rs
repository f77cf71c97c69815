//! Agent actions.

use std::fmt;

/// An action selected by a decision procedure and applied by the
/// transition function.
///
/// The enum is closed; the transition matches exhaustively, so an
/// out-of-vocabulary action cannot reach the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing.
    NoOp,
    /// Step one tile in the current heading; blocked targets set the
    /// bump flag instead of moving.
    GoForward,
    /// Rotate 90° clockwise.
    TurnRight,
    /// Rotate 90° counter-clockwise.
    TurnLeft,
    /// Clean the current tile and collect the cleaning award.
    SuckUpDirt,
    /// Power down. Away from home this incurs the shutdown penalty.
    TurnOff,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::NoOp => "no-op",
            Action::GoForward => "go-forward",
            Action::TurnRight => "turn-right",
            Action::TurnLeft => "turn-left",
            Action::SuckUpDirt => "suck-up-dirt",
            Action::TurnOff => "turn-off",
        };
        write!(f, "{name}")
    }
}
